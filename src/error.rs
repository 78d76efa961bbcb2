use cosmwasm_std::{ConversionOverflowError, StdError, Uint256};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    ConversionOverflowError(#[from] ConversionOverflowError),

    #[error("Invalid price")]
    InvalidPrice {},

    #[error("Invalid min offer")]
    InvalidMinOffer {},

    #[error("Fungible payment is not supported on a native listing")]
    UnsupportedFungiblePayment {},

    #[error("Fungible listing requires a payment token")]
    MissingPaymentToken {},

    #[error("Token sent is not the payment token of the listing")]
    WrongPaymentToken {},

    #[error("Already sold")]
    AlreadySold {},

    #[error("Listing was cancelled")]
    ListingCancelled {},

    #[error("Payment is not the same as the price {price}")]
    IncorrectPrice { price: Uint256 },

    #[error("Owner cannot offer")]
    OwnerCannotOffer {},

    #[error("Cannot offer a fungible amount on a native listing")]
    CannotOfferFungible {},

    #[error("Invalid offer, minimum is {min_offer}")]
    InvalidOffer { min_offer: Uint256 },

    #[error("Unauthorized seller")]
    UnauthorizedSeller {},

    #[error("Offer already accepted")]
    OfferAlreadyAccepted {},

    #[error("Offer was cancelled")]
    OfferCancelled {},

    #[error("Unauthorized offerer")]
    UnauthorizedOfferer {},

    #[error("Unauthorized user")]
    UnauthorizedUser {},

    #[error("User is not the NFT owner")]
    NotNftOwner {},

    #[error("NFT was not received by the marketplace")]
    AssetNotReceived {},

    #[error("Collaborator transfer failed: {reason}")]
    CollaboratorTransferFailed { reason: String },

    #[error("The reply ID is unrecognized")]
    UnrecognizedReply {},

    #[error("Native denom must not be empty")]
    InvalidDenom {},

    #[error("Cannot migrate from {previous_contract} {previous_version}")]
    CannotMigrate {
        previous_contract: String,
        previous_version: String,
    },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::Std(StdError::generic_err(err.to_string()))
    }
}
