pub mod realm_import;
pub mod yaml;

pub use realm_import::{build_custom_resource, realm_name, render_yaml};
