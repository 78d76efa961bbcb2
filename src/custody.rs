use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, QuerierWrapper, StdResult, SubMsg, Uint128, Uint256,
    WasmMsg,
};
use cw20::{BalanceResponse, Cw20Contract, Cw20ExecuteMsg, Cw20QueryMsg};
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, OwnerOfResponse};

use crate::error::ContractError;
use crate::state::{Config, Listing, PaymentMode};

pub const ASSET_TRANSFER_REPLY: u64 = 1;
pub const VALUE_TRANSFER_REPLY: u64 = 2;

/// A cw721 contract holding the listed assets.
pub struct AssetRegistry(pub Addr);

impl AssetRegistry {
    /// Moves `token_id` to `recipient`. The marketplace must own it or be an approved operator.
    pub fn transfer_custody(&self, token_id: &str, recipient: &Addr) -> StdResult<SubMsg> {
        let msg = WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
                recipient: recipient.to_string(),
                token_id: token_id.to_string(),
            })?,
            funds: vec![],
        };

        Ok(SubMsg::reply_on_error(msg, ASSET_TRANSFER_REPLY))
    }

    pub fn owner_of(&self, querier: &QuerierWrapper, token_id: &str) -> StdResult<Addr> {
        let res: OwnerOfResponse = querier.query_wasm_smart(
            self.0.to_string(),
            &Cw721QueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: Some(false),
            },
        )?;

        Ok(Addr::unchecked(res.owner))
    }
}

/// A cw20 contract used as the fungible payment rail.
pub struct ValueLedger(pub Addr);

impl ValueLedger {
    /// Moves `amount` from `from` to `to`. Value held by `custodian` is sent directly,
    /// anything else is pulled through the allowance granted to the custodian.
    pub fn transfer_value(
        &self,
        custodian: &Addr,
        from: &Addr,
        to: &Addr,
        amount: Uint256,
    ) -> Result<SubMsg, ContractError> {
        let amount = Uint128::try_from(amount)?;
        let msg = if from == custodian {
            Cw20ExecuteMsg::Transfer {
                recipient: to.to_string(),
                amount,
            }
        } else {
            Cw20ExecuteMsg::TransferFrom {
                owner: from.to_string(),
                recipient: to.to_string(),
                amount,
            }
        };

        let cw20 = Cw20Contract(self.0.clone());
        Ok(SubMsg::reply_on_error(cw20.call(msg)?, VALUE_TRANSFER_REPLY))
    }

    pub fn balance_of(&self, querier: &QuerierWrapper, address: &Addr) -> StdResult<Uint128> {
        let res: BalanceResponse = querier.query_wasm_smart(
            self.0.to_string(),
            &Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )?;

        Ok(res.balance)
    }
}

/// The payment rail a listing settles on.
pub enum Rail {
    Native { denom: String },
    Fungible(ValueLedger),
}

impl Rail {
    pub fn of(listing: &Listing, config: &Config) -> Result<Self, ContractError> {
        match (&listing.payment_mode, &listing.payment_token) {
            (PaymentMode::Native, _) => Ok(Rail::Native {
                denom: config.native_denom.clone(),
            }),
            (PaymentMode::Fungible, Some(token)) => Ok(Rail::Fungible(ValueLedger(token.clone()))),
            (PaymentMode::Fungible, None) => Err(ContractError::MissingPaymentToken {}),
        }
    }

    /// Pays `amount` held by the marketplace out to `to`.
    pub fn release(
        &self,
        custodian: &Addr,
        to: &Addr,
        amount: Uint256,
    ) -> Result<SubMsg, ContractError> {
        match self {
            Rail::Native { denom } => {
                let amount = Uint128::try_from(amount)?;
                Ok(SubMsg::new(BankMsg::Send {
                    to_address: to.to_string(),
                    amount: coins(amount.u128(), denom),
                }))
            }
            Rail::Fungible(ledger) => ledger.transfer_value(custodian, custodian, to, amount),
        }
    }
}
