pub mod aviowiki_response;
pub mod photon_response;
