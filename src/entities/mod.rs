//! Entity module - Contains all SeaORM entity definitions for the datastore.
//! Each entity has a Model struct for data and an Entity struct for operations.
//! Models serialize with camelCase field names, which is the wire format of the API.

pub mod case;
pub mod item;
pub mod user;

pub use case::{
    CaseItem, CaseItems, Column as CaseColumn, Entity as Case, Model as CaseModel,
};
pub use item::{Column as ItemColumn, Entity as Item, Model as ItemModel};
pub use user::{
    Column as UserColumn, Entity as User, Inventory, InventoryItem, Model as UserModel,
};
