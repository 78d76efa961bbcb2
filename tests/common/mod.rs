#![allow(dead_code)]

use anyhow::Result as AnyResult;
use block_marketplace::contract::{execute, instantiate, query, reply};
use block_marketplace::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, ReceiveMsg, ReceiveNftMsg};
use block_marketplace::state::{Listing, Offer, PaymentMode};
use block_marketplace::ContractError;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, Uint256,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, OwnerOfResponse};
use cw721_base::Extension;
use cw_multi_test::{App, AppBuilder, AppResponse, ContractWrapper, Executor};
use serde_json::json;

pub const DENOM: &str = "uxion";
pub const ADMIN: &str = "admin";
pub const SELLER: &str = "seller";
pub const BUYER: &str = "buyer";
pub const BIDDER: &str = "bidder";

pub const STARTING_BALANCE: u128 = 1_000;

type NftContract<'a> = cw721_base::Cw721Contract<'a, Extension, Empty, Empty, Empty>;

fn nft_instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: cw721_base::InstantiateMsg,
) -> StdResult<Response> {
    NftContract::default()
        .instantiate(deps, env, info, msg)
        .map_err(|err| StdError::generic_err(err.to_string()))
}

fn nft_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: cw721_base::ExecuteMsg<Extension, Empty>,
) -> StdResult<Response> {
    NftContract::default()
        .execute(deps, env, info, msg)
        .map_err(|err| StdError::generic_err(err.to_string()))
}

fn nft_query(deps: Deps, env: Env, msg: cw721_base::QueryMsg<Empty>) -> StdResult<Binary> {
    NftContract::default().query(deps, env, msg)
}

pub fn contract_error(err: anyhow::Error) -> ContractError {
    err.downcast().unwrap()
}

/// A marketplace wired to a real cw721 registry and cw20 ledger.
pub struct Suite {
    pub app: App,
    pub market: Addr,
    pub nfts: Addr,
    pub token: Addr,
}

impl Suite {
    pub fn new() -> Self {
        let mut app = AppBuilder::new().build(|router, _, storage| {
            for who in [BUYER, BIDDER] {
                router
                    .bank
                    .init_balance(storage, &Addr::unchecked(who), coins(STARTING_BALANCE, DENOM))
                    .unwrap();
            }
        });

        let market_code = app.store_code(Box::new(
            ContractWrapper::new(execute, instantiate, query).with_reply(reply),
        ));
        let nft_code = app.store_code(Box::new(ContractWrapper::new(
            nft_execute,
            nft_instantiate,
            nft_query,
        )));
        let token_code = app.store_code(Box::new(ContractWrapper::new(
            cw20_base::contract::execute,
            cw20_base::contract::instantiate,
            cw20_base::contract::query,
        )));

        let admin = Addr::unchecked(ADMIN);
        let market = app
            .instantiate_contract(
                market_code,
                admin.clone(),
                &InstantiateMsg {
                    native_denom: DENOM.to_string(),
                    market_owner: None,
                },
                &[],
                "block-marketplace",
                None,
            )
            .unwrap();
        let nfts = app
            .instantiate_contract(
                nft_code,
                admin.clone(),
                &json!({ "name": "Block Nft", "symbol": "BNFT", "minter": ADMIN }),
                &[],
                "block-nft",
                None,
            )
            .unwrap();
        let token = app
            .instantiate_contract(
                token_code,
                admin,
                &cw20_base::msg::InstantiateMsg {
                    name: "Block Token".to_string(),
                    symbol: "BCT".to_string(),
                    decimals: 6,
                    initial_balances: [BUYER, BIDDER]
                        .into_iter()
                        .map(|who| Cw20Coin {
                            address: who.to_string(),
                            amount: Uint128::new(STARTING_BALANCE),
                        })
                        .collect(),
                    mint: None,
                    marketing: None,
                },
                &[],
                "block-token",
                None,
            )
            .unwrap();

        Suite {
            app,
            market,
            nfts,
            token,
        }
    }

    /// Mints `token_id` to `owner` and approves the marketplace as operator.
    pub fn mint_approved(&mut self, owner: &str, token_id: &str) {
        self.mint(owner, token_id);
        self.app
            .execute_contract(
                Addr::unchecked(owner),
                self.nfts.clone(),
                &Cw721ExecuteMsg::ApproveAll {
                    operator: self.market.to_string(),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn mint(&mut self, owner: &str, token_id: &str) {
        let mint = json!({
            "mint": {
                "token_id": token_id,
                "owner": owner,
                "token_uri": null,
                "extension": null,
            }
        });
        self.app
            .execute_contract(Addr::unchecked(ADMIN), self.nfts.clone(), &mint, &[])
            .unwrap();
    }

    pub fn payment_token(&self, payment_mode: &PaymentMode) -> Option<String> {
        match payment_mode {
            PaymentMode::Native => None,
            PaymentMode::Fungible => Some(self.token.to_string()),
        }
    }

    pub fn list(
        &mut self,
        seller: &str,
        token_id: &str,
        payment_mode: PaymentMode,
        price: u128,
        min_offer: u128,
    ) -> AnyResult<AppResponse> {
        let msg = ExecuteMsg::ListNft {
            nft_contract: self.nfts.to_string(),
            token_id: token_id.to_string(),
            payment_token: self.payment_token(&payment_mode),
            payment_mode,
            price: Uint256::from(price),
            min_offer: Uint256::from(min_offer),
        };
        self.execute(seller, &msg, 0)
    }

    pub fn buy(&mut self, buyer: &str, listing_id: u64, funds: u128) -> AnyResult<AppResponse> {
        self.execute(buyer, &ExecuteMsg::BuyNft { listing_id }, funds)
    }

    pub fn offer(
        &mut self,
        offerer: &str,
        listing_id: u64,
        offer_amount: u128,
        funds: u128,
    ) -> AnyResult<AppResponse> {
        let msg = ExecuteMsg::Offer {
            listing_id,
            offer_amount: Uint256::from(offer_amount),
        };
        self.execute(offerer, &msg, funds)
    }

    pub fn accept_offer(&mut self, sender: &str, offer_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::AcceptOffer { offer_id }, 0)
    }

    pub fn reject_offer(&mut self, sender: &str, offer_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::RejectOffer { offer_id }, 0)
    }

    pub fn cancel_offer(&mut self, sender: &str, offer_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::CancelOffer { offer_id }, 0)
    }

    pub fn cancel_listing(&mut self, sender: &str, listing_id: u64) -> AnyResult<AppResponse> {
        self.execute(sender, &ExecuteMsg::CancelListing { listing_id }, 0)
    }

    fn execute(&mut self, sender: &str, msg: &ExecuteMsg, funds: u128) -> AnyResult<AppResponse> {
        let funds = if funds == 0 {
            vec![]
        } else {
            coins(funds, DENOM)
        };
        self.app
            .execute_contract(Addr::unchecked(sender), self.market.clone(), msg, &funds)
    }

    pub fn approve_tokens(&mut self, owner: &str, amount: u128) {
        self.app
            .execute_contract(
                Addr::unchecked(owner),
                self.token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.market.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Pays through the cw20 `Send` hook.
    pub fn send_tokens(
        &mut self,
        sender: &str,
        amount: u128,
        hook: &ReceiveMsg,
    ) -> AnyResult<AppResponse> {
        let msg = Cw20ExecuteMsg::Send {
            contract: self.market.to_string(),
            amount: Uint128::new(amount),
            msg: to_json_binary(hook)?,
        };
        self.app
            .execute_contract(Addr::unchecked(sender), self.token.clone(), &msg, &[])
    }

    /// Lists through the cw721 `SendNft` hook.
    pub fn send_nft(
        &mut self,
        sender: &str,
        token_id: &str,
        hook: &ReceiveNftMsg,
    ) -> AnyResult<AppResponse> {
        let msg = Cw721ExecuteMsg::SendNft {
            contract: self.market.to_string(),
            token_id: token_id.to_string(),
            msg: to_json_binary(hook)?,
        };
        self.app
            .execute_contract(Addr::unchecked(sender), self.nfts.clone(), &msg, &[])
    }

    pub fn listing(&self, id: u64) -> StdResult<Listing> {
        self.app
            .wrap()
            .query_wasm_smart(self.market.to_string(), &QueryMsg::GetListing { id })
    }

    pub fn offer_record(&self, id: u64) -> StdResult<Offer> {
        self.app
            .wrap()
            .query_wasm_smart(self.market.to_string(), &QueryMsg::GetOffer { id })
    }

    pub fn listing_count(&self) -> u64 {
        self.app
            .wrap()
            .query_wasm_smart(self.market.to_string(), &QueryMsg::GetListingCount {})
            .unwrap()
    }

    pub fn escrow(&self, payment_mode: PaymentMode) -> u128 {
        let escrow: Uint128 = self
            .app
            .wrap()
            .query_wasm_smart(
                self.market.to_string(),
                &QueryMsg::EscrowBalance {
                    payment_token: self.payment_token(&payment_mode),
                },
            )
            .unwrap();
        escrow.u128()
    }

    pub fn nft_owner(&self, token_id: &str) -> String {
        let res: OwnerOfResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.nfts.to_string(),
                &Cw721QueryMsg::OwnerOf {
                    token_id: token_id.to_string(),
                    include_expired: None,
                },
            )
            .unwrap();
        res.owner
    }

    pub fn native_balance(&self, who: &str) -> u128 {
        self.app.wrap().query_balance(who, DENOM).unwrap().amount.u128()
    }

    pub fn token_balance(&self, who: &str) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.to_string(),
                &Cw20QueryMsg::Balance {
                    address: who.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }
}
