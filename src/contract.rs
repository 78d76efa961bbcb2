#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Api, Binary, Deps, DepsMut, Env, MessageInfo, Order, Reply,
    Response, StdResult, Storage, SubMsg, SubMsgResult, Uint128, Uint256,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use cw20::Cw20ReceiveMsg;
use cw721::Cw721ReceiveMsg;
use cw_utils::{may_pay, nonpayable};
use semver::Version;

use crate::custody::{
    AssetRegistry, Rail, ValueLedger, ASSET_TRANSFER_REPLY, VALUE_TRANSFER_REPLY,
};
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReceiveMsg, ReceiveNftMsg};
use crate::state::{
    next_listing_id, next_offer_id, Config, Listing, ListingStatus, Offer, OfferStatus,
    PaymentMode, CONFIG, LISTINGS, LISTING_COUNT, OFFERS, OFFER_COUNT,
};

pub const CONTRACT_NAME: &str = "crates.io:block-marketplace";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::InvalidDenom {});
    }

    let market_owner = match msg.market_owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    let config = Config {
        market_owner,
        native_denom: msg.native_denom,
    };

    CONFIG.save(deps.storage, &config)?;
    LISTING_COUNT.save(deps.storage, &0u64)?;
    OFFER_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("market_owner", config.market_owner)
        .add_attribute("native_denom", config.native_denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ListNft {
            nft_contract,
            token_id,
            payment_mode,
            payment_token,
            price,
            min_offer,
        } => {
            let terms =
                ListingTerms::validate(deps.api, payment_mode, payment_token, price, min_offer)?;
            execute_list_nft(deps, env, info, nft_contract, token_id, terms)
        }
        ExecuteMsg::BuyNft { listing_id } => execute_buy_nft(deps, env, info, listing_id),
        ExecuteMsg::Offer {
            listing_id,
            offer_amount,
        } => execute_offer(deps, env, info, listing_id, offer_amount),
        ExecuteMsg::AcceptOffer { offer_id } => execute_accept_offer(deps, env, info, offer_id),
        ExecuteMsg::RejectOffer { offer_id } => execute_reject_offer(deps, env, info, offer_id),
        ExecuteMsg::CancelOffer { offer_id } => execute_cancel_offer(deps, env, info, offer_id),
        ExecuteMsg::CancelListing { listing_id } => {
            execute_cancel_listing(deps, env, info, listing_id)
        }
        ExecuteMsg::Receive(msg) => execute_receive(deps, env, info, msg),
        ExecuteMsg::ReceiveNft(msg) => execute_receive_nft(deps, env, info, msg),
    }
}

/// Sale terms that passed validation.
pub struct ListingTerms {
    pub payment_mode: PaymentMode,
    pub payment_token: Option<Addr>,
    pub price: Uint256,
    pub min_offer: Uint256,
}

impl ListingTerms {
    pub fn validate(
        api: &dyn Api,
        payment_mode: PaymentMode,
        payment_token: Option<String>,
        price: Uint256,
        min_offer: Uint256,
    ) -> Result<Self, ContractError> {
        // both rails settle in Uint128
        let max = Uint256::from(Uint128::MAX);
        if price.is_zero() || price > max {
            return Err(ContractError::InvalidPrice {});
        }
        if min_offer.is_zero() || min_offer > max {
            return Err(ContractError::InvalidMinOffer {});
        }

        let payment_token = match (&payment_mode, payment_token) {
            (PaymentMode::Native, None) => None,
            (PaymentMode::Native, Some(_)) => {
                return Err(ContractError::UnsupportedFungiblePayment {})
            }
            (PaymentMode::Fungible, Some(token)) => Some(api.addr_validate(&token)?),
            (PaymentMode::Fungible, None) => return Err(ContractError::MissingPaymentToken {}),
        };

        Ok(ListingTerms {
            payment_mode,
            payment_token,
            price,
            min_offer,
        })
    }
}

fn save_listing(
    storage: &mut dyn Storage,
    owner: Addr,
    nft_contract: Addr,
    token_id: String,
    terms: ListingTerms,
) -> StdResult<Listing> {
    let listing = Listing {
        id: next_listing_id(storage)?,
        owner,
        nft_contract,
        token_id,
        payment_mode: terms.payment_mode,
        payment_token: terms.payment_token,
        price: terms.price,
        min_offer: terms.min_offer,
        status: ListingStatus::Active,
    };
    LISTINGS.save(storage, listing.id, &listing)?;

    Ok(listing)
}

fn save_offer(
    storage: &mut dyn Storage,
    listing_id: u64,
    offerer: Addr,
    offer_amount: Uint256,
) -> StdResult<Offer> {
    let offer = Offer {
        id: next_offer_id(storage)?,
        listing_id,
        offerer,
        offer_amount,
        status: OfferStatus::Pending,
    };
    OFFERS.save(storage, offer.id, &offer)?;

    Ok(offer)
}

fn ensure_active(listing: &Listing) -> Result<(), ContractError> {
    match listing.status {
        ListingStatus::Active => Ok(()),
        ListingStatus::Sold => Err(ContractError::AlreadySold {}),
        ListingStatus::Cancelled => Err(ContractError::ListingCancelled {}),
    }
}

fn ensure_pending(offer: &Offer) -> Result<(), ContractError> {
    match offer.status {
        OfferStatus::Pending => Ok(()),
        OfferStatus::Accepted => Err(ContractError::OfferAlreadyAccepted {}),
        OfferStatus::Cancelled => Err(ContractError::OfferCancelled {}),
    }
}

fn ensure_payment_token(listing: &Listing, token: &Addr) -> Result<(), ContractError> {
    match &listing.payment_token {
        Some(payment_token) if payment_token == token => Ok(()),
        _ => Err(ContractError::WrongPaymentToken {}),
    }
}

/// Marks the listing sold and releases the asset to `recipient`.
fn hand_over(
    storage: &mut dyn Storage,
    listing: &mut Listing,
    recipient: &Addr,
) -> Result<SubMsg, ContractError> {
    listing.status = ListingStatus::Sold;
    LISTINGS.save(storage, listing.id, listing)?;

    let registry = AssetRegistry(listing.nft_contract.clone());
    Ok(registry.transfer_custody(&listing.token_id, recipient)?)
}

/// Cancels the offer and returns its escrowed bid to the offerer.
fn refund_offer(
    deps: DepsMut,
    env: &Env,
    listing: &Listing,
    offer: &mut Offer,
) -> Result<SubMsg, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    offer.status = OfferStatus::Cancelled;
    OFFERS.save(deps.storage, offer.id, offer)?;

    Rail::of(listing, &config)?.release(
        &env.contract.address,
        &offer.offerer,
        offer.offer_amount,
    )
}

fn listed_response(listing: &Listing) -> Response {
    Response::new()
        .add_attribute("action", "list_nft")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("seller", listing.owner.clone())
        .add_attribute("nft_contract", listing.nft_contract.clone())
        .add_attribute("token_id", listing.token_id.clone())
        .add_attribute("price", listing.price.to_string())
        .add_attribute("min_offer", listing.min_offer.to_string())
}

pub fn execute_list_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    nft_contract: String,
    token_id: String,
    terms: ListingTerms,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let registry = AssetRegistry(deps.api.addr_validate(&nft_contract)?);
    if registry.owner_of(&deps.querier, &token_id)? != info.sender {
        return Err(ContractError::NotNftOwner {});
    }

    let listing = save_listing(deps.storage, info.sender, registry.0.clone(), token_id, terms)?;
    let custody = registry.transfer_custody(&listing.token_id, &env.contract.address)?;

    Ok(listed_response(&listing).add_submessage(custody))
}

pub fn execute_buy_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    listing_id: u64,
) -> Result<Response, ContractError> {
    let mut listing = LISTINGS.load(deps.storage, listing_id)?;
    ensure_active(&listing)?;

    let config = CONFIG.load(deps.storage)?;
    let rail = Rail::of(&listing, &config)?;

    let payment = match &rail {
        Rail::Native { denom } => {
            let paid = may_pay(&info, denom)?;
            if Uint256::from(paid) != listing.price {
                return Err(ContractError::IncorrectPrice {
                    price: listing.price,
                });
            }
            rail.release(&env.contract.address, &listing.owner, listing.price)?
        }
        Rail::Fungible(ledger) => {
            nonpayable(&info)?;
            ledger.transfer_value(
                &env.contract.address,
                &info.sender,
                &listing.owner,
                listing.price,
            )?
        }
    };

    let transfer = hand_over(deps.storage, &mut listing, &info.sender)?;

    Ok(Response::new()
        .add_attribute("action", "buy_nft")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("seller", listing.owner)
        .add_attribute("buyer", info.sender)
        .add_attribute("price", listing.price.to_string())
        .add_submessage(payment)
        .add_submessage(transfer))
}

pub fn execute_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    listing_id: u64,
    offer_amount: Uint256,
) -> Result<Response, ContractError> {
    let listing = LISTINGS.load(deps.storage, listing_id)?;
    ensure_active(&listing)?;

    if info.sender == listing.owner {
        return Err(ContractError::OwnerCannotOffer {});
    }

    let config = CONFIG.load(deps.storage)?;
    let rail = Rail::of(&listing, &config)?;

    // native bids arrive as attached funds
    let bid = match &rail {
        Rail::Native { denom } => {
            if !offer_amount.is_zero() {
                return Err(ContractError::CannotOfferFungible {});
            }
            Uint256::from(may_pay(&info, denom)?)
        }
        Rail::Fungible(_) => {
            nonpayable(&info)?;
            offer_amount
        }
    };

    if bid < listing.min_offer {
        return Err(ContractError::InvalidOffer {
            min_offer: listing.min_offer,
        });
    }

    let mut res = Response::new();
    if let Rail::Fungible(ledger) = &rail {
        res = res.add_submessage(ledger.transfer_value(
            &env.contract.address,
            &info.sender,
            &env.contract.address,
            bid,
        )?);
    }

    let offer = save_offer(deps.storage, listing.id, info.sender, bid)?;

    Ok(res
        .add_attribute("action", "offer")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("offer_id", offer.id.to_string())
        .add_attribute("offerer", offer.offerer)
        .add_attribute("offer_amount", offer.offer_amount.to_string()))
}

pub fn execute_accept_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    offer_id: u64,
) -> Result<Response, ContractError> {
    let mut offer = OFFERS.load(deps.storage, offer_id)?;
    let mut listing = LISTINGS.load(deps.storage, offer.listing_id)?;

    if listing.owner != info.sender {
        return Err(ContractError::UnauthorizedSeller {});
    }
    ensure_active(&listing)?;
    ensure_pending(&offer)?;

    let config = CONFIG.load(deps.storage)?;
    let payment = Rail::of(&listing, &config)?.release(
        &env.contract.address,
        &listing.owner,
        offer.offer_amount,
    )?;

    offer.status = OfferStatus::Accepted;
    OFFERS.save(deps.storage, offer.id, &offer)?;

    let transfer = hand_over(deps.storage, &mut listing, &offer.offerer)?;

    Ok(Response::new()
        .add_attribute("action", "accept_offer")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("offer_id", offer.id.to_string())
        .add_attribute("seller", listing.owner)
        .add_attribute("buyer", offer.offerer)
        .add_attribute("offer_amount", offer.offer_amount.to_string())
        .add_submessage(payment)
        .add_submessage(transfer))
}

pub fn execute_reject_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    offer_id: u64,
) -> Result<Response, ContractError> {
    let mut offer = OFFERS.load(deps.storage, offer_id)?;
    let listing = LISTINGS.load(deps.storage, offer.listing_id)?;

    if listing.owner != info.sender {
        return Err(ContractError::UnauthorizedSeller {});
    }
    ensure_pending(&offer)?;

    let refund = refund_offer(deps, &env, &listing, &mut offer)?;

    Ok(Response::new()
        .add_attribute("action", "reject_offer")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("offer_id", offer.id.to_string())
        .add_attribute("offerer", offer.offerer)
        .add_submessage(refund))
}

pub fn execute_cancel_offer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    offer_id: u64,
) -> Result<Response, ContractError> {
    let mut offer = OFFERS.load(deps.storage, offer_id)?;

    if offer.status == OfferStatus::Accepted {
        return Err(ContractError::OfferAlreadyAccepted {});
    }
    if offer.offerer != info.sender {
        return Err(ContractError::UnauthorizedOfferer {});
    }
    ensure_pending(&offer)?;

    // refunds stay available whatever became of the listing
    let listing = LISTINGS.load(deps.storage, offer.listing_id)?;
    let refund = refund_offer(deps, &env, &listing, &mut offer)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_offer")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("offer_id", offer.id.to_string())
        .add_attribute("offerer", offer.offerer)
        .add_attribute("refund", offer.offer_amount.to_string())
        .add_submessage(refund))
}

pub fn execute_cancel_listing(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    listing_id: u64,
) -> Result<Response, ContractError> {
    let mut listing = LISTINGS.load(deps.storage, listing_id)?;

    if listing.owner != info.sender {
        return Err(ContractError::UnauthorizedUser {});
    }
    ensure_active(&listing)?;

    listing.status = ListingStatus::Cancelled;
    LISTINGS.save(deps.storage, listing.id, &listing)?;

    let msg = AssetRegistry(listing.nft_contract.clone())
        .transfer_custody(&listing.token_id, &listing.owner)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_listing")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("token_id", listing.token_id)
        .add_attribute("seller", listing.owner)
        .add_submessage(msg))
}

pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_receive_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    // info.sender is the cw20 contract
    let sender = deps.api.addr_validate(&cw20_receive_msg.sender)?;
    let amount = Uint256::from(cw20_receive_msg.amount);

    let msg: ReceiveMsg = from_json(&cw20_receive_msg.msg)?;
    match msg {
        ReceiveMsg::BuyNft { listing_id } => {
            receive_buy_nft(deps, env, info.sender, sender, amount, listing_id)
        }
        ReceiveMsg::Offer { listing_id } => {
            receive_offer(deps, info.sender, sender, amount, listing_id)
        }
    }
}

pub fn receive_buy_nft(
    deps: DepsMut,
    env: Env,
    token: Addr,
    buyer: Addr,
    amount: Uint256,
    listing_id: u64,
) -> Result<Response, ContractError> {
    let mut listing = LISTINGS.load(deps.storage, listing_id)?;
    ensure_active(&listing)?;
    ensure_payment_token(&listing, &token)?;

    if amount != listing.price {
        return Err(ContractError::IncorrectPrice {
            price: listing.price,
        });
    }

    // the price is already held by the marketplace
    let payment = ValueLedger(token).transfer_value(
        &env.contract.address,
        &env.contract.address,
        &listing.owner,
        amount,
    )?;
    let transfer = hand_over(deps.storage, &mut listing, &buyer)?;

    Ok(Response::new()
        .add_attribute("action", "receive_buy_nft")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("seller", listing.owner)
        .add_attribute("buyer", buyer)
        .add_attribute("price", listing.price.to_string())
        .add_submessage(payment)
        .add_submessage(transfer))
}

pub fn receive_offer(
    deps: DepsMut,
    token: Addr,
    offerer: Addr,
    amount: Uint256,
    listing_id: u64,
) -> Result<Response, ContractError> {
    let listing = LISTINGS.load(deps.storage, listing_id)?;
    ensure_active(&listing)?;

    if offerer == listing.owner {
        return Err(ContractError::OwnerCannotOffer {});
    }
    ensure_payment_token(&listing, &token)?;

    if amount < listing.min_offer {
        return Err(ContractError::InvalidOffer {
            min_offer: listing.min_offer,
        });
    }

    let offer = save_offer(deps.storage, listing.id, offerer, amount)?;

    Ok(Response::new()
        .add_attribute("action", "receive_offer")
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("offer_id", offer.id.to_string())
        .add_attribute("offerer", offer.offerer)
        .add_attribute("offer_amount", offer.offer_amount.to_string()))
}

pub fn execute_receive_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receive_msg: Cw721ReceiveMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    // info.sender claims to be the NFT contract, so it must report the asset in custody
    let registry = AssetRegistry(info.sender.clone());
    if registry.owner_of(&deps.querier, &receive_msg.token_id)? != env.contract.address {
        return Err(ContractError::AssetNotReceived {});
    }
    let owner = deps.api.addr_validate(&receive_msg.sender)?;

    let msg: ReceiveNftMsg = from_json(&receive_msg.msg)?;
    match msg {
        ReceiveNftMsg::ListNft {
            payment_mode,
            payment_token,
            price,
            min_offer,
        } => {
            let terms =
                ListingTerms::validate(deps.api, payment_mode, payment_token, price, min_offer)?;
            let listing =
                save_listing(deps.storage, owner, info.sender, receive_msg.token_id, terms)?;

            Ok(listed_response(&listing))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        ASSET_TRANSFER_REPLY | VALUE_TRANSFER_REPLY => match reply.result {
            // failing here reverts every write of the originating call
            SubMsgResult::Err(reason) => Err(ContractError::CollaboratorTransferFailed { reason }),
            SubMsgResult::Ok(_) => Ok(Response::new()),
        },
        _ => Err(ContractError::UnrecognizedReply {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    let stored_version: Version = stored.version.parse()?;
    let version: Version = CONTRACT_VERSION.parse()?;

    if stored.contract != CONTRACT_NAME || stored_version > version {
        return Err(ContractError::CannotMigrate {
            previous_contract: stored.contract,
            previous_version: stored.version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::GetListing { id } => to_json_binary(&get_listing(deps, id)?),
        QueryMsg::GetOffer { id } => to_json_binary(&get_offer(deps, id)?),
        QueryMsg::GetListingCount {} => to_json_binary(&LISTING_COUNT.load(deps.storage)?),
        QueryMsg::GetOfferCount {} => to_json_binary(&OFFER_COUNT.load(deps.storage)?),
        QueryMsg::GetAllListings { from_index, limit } => {
            to_json_binary(&get_all_listings(deps, from_index, limit)?)
        }
        QueryMsg::GetListingsBySeller {
            seller,
            from_index,
            limit,
        } => to_json_binary(&get_listings_seller(deps, seller, from_index, limit)?),
        QueryMsg::GetOffersByListing {
            listing_id,
            from_index,
            limit,
        } => to_json_binary(&get_offers_listing(deps, listing_id, from_index, limit)?),
        QueryMsg::GetOffersByOfferer {
            offerer,
            from_index,
            limit,
        } => to_json_binary(&get_offers_offerer(deps, offerer, from_index, limit)?),
        QueryMsg::EscrowBalance { payment_token } => {
            to_json_binary(&get_escrow_balance(deps, env, payment_token)?)
        }
    }
}

pub fn get_listing(deps: Deps, id: u64) -> StdResult<Listing> {
    LISTINGS.load(deps.storage, id)
}

pub fn get_offer(deps: Deps, id: u64) -> StdResult<Offer> {
    OFFERS.load(deps.storage, id)
}

fn page(from_index: Option<u64>, limit: Option<u64>) -> (Option<Bound<'static, u64>>, usize) {
    let start = from_index.map(Bound::inclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    (start, limit)
}

pub fn get_all_listings(
    deps: Deps,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Vec<Listing>> {
    let (start, limit) = page(from_index, limit);

    LISTINGS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, listing)| listing))
        .collect()
}

pub fn get_listings_seller(
    deps: Deps,
    seller: String,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Vec<Listing>> {
    let seller = deps.api.addr_validate(&seller)?;
    let (start, limit) = page(from_index, limit);

    LISTINGS
        .range(deps.storage, start, None, Order::Ascending)
        .map(|item| item.map(|(_, listing)| listing))
        .filter(|item| item.as_ref().map_or(true, |listing| listing.owner == seller))
        .take(limit)
        .collect()
}

pub fn get_offers_listing(
    deps: Deps,
    listing_id: u64,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Vec<Offer>> {
    let (start, limit) = page(from_index, limit);

    OFFERS
        .range(deps.storage, start, None, Order::Ascending)
        .map(|item| item.map(|(_, offer)| offer))
        .filter(|item| item.as_ref().map_or(true, |offer| offer.listing_id == listing_id))
        .take(limit)
        .collect()
}

pub fn get_offers_offerer(
    deps: Deps,
    offerer: String,
    from_index: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Vec<Offer>> {
    let offerer = deps.api.addr_validate(&offerer)?;
    let (start, limit) = page(from_index, limit);

    OFFERS
        .range(deps.storage, start, None, Order::Ascending)
        .map(|item| item.map(|(_, offer)| offer))
        .filter(|item| item.as_ref().map_or(true, |offer| offer.offerer == offerer))
        .take(limit)
        .collect()
}

pub fn get_escrow_balance(
    deps: Deps,
    env: Env,
    payment_token: Option<String>,
) -> StdResult<Uint128> {
    match payment_token {
        Some(token) => ValueLedger(deps.api.addr_validate(&token)?)
            .balance_of(&deps.querier, &env.contract.address),
        None => {
            let config = CONFIG.load(deps.storage)?;
            let balance = deps
                .querier
                .query_balance(env.contract.address.to_string(), config.native_denom)?;
            Ok(balance.amount)
        }
    }
}
