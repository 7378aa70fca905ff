use serde::{Deserialize, Serialize};

use crate::dashboard::format::{format_currency, format_signed_amount};
use crate::dashboard::model::{BankData, Recipient, Transaction};
use crate::error::ChartResult;

/// Avatars shown inline before the overflow slot takes over.
pub const VISIBLE_RECIPIENTS: usize = 4;

/// Glyph shown next to a transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionIcon {
    Restaurant,
    AccountBalance,
    ShoppingCart,
}

impl TransactionIcon {
    /// Maps the asset's icon name; unknown names fall back to the cart.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Restaurant" => Self::Restaurant,
            "AccountBalance" => Self::AccountBalance,
            _ => Self::ShoppingCart,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecipientSlot {
    Avatar {
        name: String,
        image_url: Option<String>,
        is_online: bool,
    },
    /// Last slot: an avatar dimmed behind a `"{remaining}+"` counter that
    /// opens the full list.
    Overflow {
        name: String,
        image_url: Option<String>,
        remaining: usize,
    },
}

impl RecipientSlot {
    fn image_url(recipient: &Recipient) -> Option<String> {
        (!recipient.image_url.is_empty()).then(|| recipient.image_url.clone())
    }

    #[must_use]
    pub fn badge_text(&self) -> Option<String> {
        match self {
            Self::Avatar { .. } => None,
            Self::Overflow { remaining, .. } => Some(format!("{remaining}+")),
        }
    }
}

/// Horizontal recipients strip plus the list behind the overflow slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientStrip {
    pub slots: Vec<RecipientSlot>,
    pub all: Vec<Recipient>,
}

impl RecipientStrip {
    /// Up to four avatars; a fifth recipient turns into the overflow slot
    /// counting everyone past the first four.
    #[must_use]
    pub fn from_recipients(recipients: &[Recipient]) -> Self {
        let slots = recipients
            .iter()
            .take(VISIBLE_RECIPIENTS + 1)
            .enumerate()
            .map(|(position, recipient)| {
                if position < VISIBLE_RECIPIENTS {
                    RecipientSlot::Avatar {
                        name: recipient.name.clone(),
                        image_url: RecipientSlot::image_url(recipient),
                        is_online: recipient.is_online,
                    }
                } else {
                    RecipientSlot::Overflow {
                        name: recipient.name.clone(),
                        image_url: RecipientSlot::image_url(recipient),
                        remaining: recipients.len() - VISIBLE_RECIPIENTS,
                    }
                }
            })
            .collect();

        Self {
            slots,
            all: recipients.to_vec(),
        }
    }

    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.slots
            .iter()
            .any(|slot| matches!(slot, RecipientSlot::Overflow { .. }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub title: String,
    pub description: String,
    pub amount_text: String,
    pub icon: TransactionIcon,
}

impl TransactionRow {
    pub fn from_transaction(transaction: &Transaction) -> ChartResult<Self> {
        Ok(Self {
            title: transaction.kind.clone(),
            description: transaction.description.clone(),
            amount_text: format_signed_amount(transaction.amount)?,
            icon: TransactionIcon::from_name(&transaction.icon),
        })
    }
}

/// Everything the home screen shows besides the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeScreenModel {
    pub balance_text: String,
    pub recipients: RecipientStrip,
    pub transactions: Vec<TransactionRow>,
}

impl HomeScreenModel {
    pub fn from_bank_data(data: &BankData) -> ChartResult<Self> {
        Ok(Self {
            balance_text: format_currency(data.balance)?,
            recipients: RecipientStrip::from_recipients(&data.recipients),
            transactions: data
                .transactions
                .iter()
                .map(TransactionRow::from_transaction)
                .collect::<ChartResult<Vec<_>>>()?,
        })
    }
}
