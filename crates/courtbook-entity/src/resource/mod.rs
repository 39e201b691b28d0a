//! Bookable resource catalog entities.

pub mod kind;
pub mod model;

pub use kind::ResourceType;
pub use model::{
    Coach, Court, CreateCoach, CreateCourt, CreateEquipment, Equipment, Resource, Tariff,
};
