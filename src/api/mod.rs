mod client;
mod interface;

pub use client::Client;
pub use interface::{AddressApi, Api, DynApi, PoiApi};
