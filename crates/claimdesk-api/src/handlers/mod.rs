pub mod attachment_download;
pub mod claim_get;
pub mod claim_list;
pub mod claim_submit;
pub mod pages;
