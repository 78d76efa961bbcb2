use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint256};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub market_owner: Addr,
    pub native_denom: String,
}

#[cw_serde]
pub enum PaymentMode {
    Native,
    Fungible,
}

#[cw_serde]
pub enum ListingStatus {
    Active,
    Sold,
    Cancelled,
}

#[cw_serde]
pub struct Listing {
    pub id: u64,
    /// Seller who created the listing. Kept after the sale.
    pub owner: Addr,
    pub nft_contract: Addr,
    pub token_id: String,
    pub payment_mode: PaymentMode,
    /// `None` is the native rail.
    pub payment_token: Option<Addr>,
    pub price: Uint256,
    pub min_offer: Uint256,
    pub status: ListingStatus,
}

impl Listing {
    pub fn sold(&self) -> bool {
        self.status == ListingStatus::Sold
    }

    pub fn cancelled(&self) -> bool {
        self.status == ListingStatus::Cancelled
    }
}

#[cw_serde]
pub enum OfferStatus {
    Pending,
    Accepted,
    Cancelled,
}

#[cw_serde]
pub struct Offer {
    pub id: u64,
    pub listing_id: u64,
    pub offerer: Addr,
    pub offer_amount: Uint256,
    pub status: OfferStatus,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const LISTINGS: Map<u64, Listing> = Map::new("listings");
pub const OFFERS: Map<u64, Offer> = Map::new("offers");
pub const LISTING_COUNT: Item<u64> = Item::new("listing_count");
pub const OFFER_COUNT: Item<u64> = Item::new("offer_count");

/// Hands out the next listing id. Ids are never reused.
pub fn next_listing_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let id = LISTING_COUNT.may_load(storage)?.unwrap_or_default();
    LISTING_COUNT.save(storage, &(id + 1))?;
    Ok(id)
}

pub fn next_offer_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let id = OFFER_COUNT.may_load(storage)?.unwrap_or_default();
    OFFER_COUNT.save(storage, &(id + 1))?;
    Ok(id)
}
