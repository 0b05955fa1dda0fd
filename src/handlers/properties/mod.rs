// One file per operation family, re-exported for the router.
mod create;
mod list;
mod update;

pub use create::add_property;
pub use list::{
    account_properties, account_properties_by_key, account_properties_by_value, all_properties,
    properties_by_key, properties_by_value,
};
pub use update::update_property;
