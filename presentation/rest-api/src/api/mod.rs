pub mod error;
pub mod shared;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod invoice {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod order {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
