use crate::state::{Config, Listing, Offer, PaymentMode};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Uint128, Uint256};
use cw20::Cw20ReceiveMsg;
use cw721::Cw721ReceiveMsg;

#[cw_serde]
pub struct InstantiateMsg {
    /// Denom accepted on the native rail.
    pub native_denom: String,
    /// Defaults to the instantiating address.
    pub market_owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pulls the NFT into custody. The marketplace must be approved as operator.
    ListNft {
        nft_contract: String,
        token_id: String,
        payment_mode: PaymentMode,
        payment_token: Option<String>,
        price: Uint256,
        min_offer: Uint256,
    },
    BuyNft {
        listing_id: u64,
    },
    /// `offer_amount` must be zero on native listings, the bid is the attached funds.
    Offer {
        listing_id: u64,
        offer_amount: Uint256,
    },
    AcceptOffer {
        offer_id: u64,
    },
    RejectOffer {
        offer_id: u64,
    },
    CancelOffer {
        offer_id: u64,
    },
    CancelListing {
        listing_id: u64,
    },
    Receive(Cw20ReceiveMsg),
    ReceiveNft(Cw721ReceiveMsg),
}

/// Hook messages carried by a cw20 `Send`.
#[cw_serde]
pub enum ReceiveMsg {
    BuyNft { listing_id: u64 },
    Offer { listing_id: u64 },
}

/// Hook messages carried by a cw721 `SendNft`.
#[cw_serde]
pub enum ReceiveNftMsg {
    ListNft {
        payment_mode: PaymentMode,
        payment_token: Option<String>,
        price: Uint256,
        min_offer: Uint256,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(Listing)]
    GetListing { id: u64 },
    #[returns(Offer)]
    GetOffer { id: u64 },
    #[returns(u64)]
    GetListingCount {},
    #[returns(u64)]
    GetOfferCount {},
    #[returns(Vec<Listing>)]
    GetAllListings {
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    #[returns(Vec<Listing>)]
    GetListingsBySeller {
        seller: String,
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    #[returns(Vec<Offer>)]
    GetOffersByListing {
        listing_id: u64,
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    #[returns(Vec<Offer>)]
    GetOffersByOfferer {
        offerer: String,
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    /// What the marketplace holds on a rail. `None` asks for the native denom.
    #[returns(Uint128)]
    EscrowBalance { payment_token: Option<String> },
}

#[cw_serde]
pub struct MigrateMsg {}
