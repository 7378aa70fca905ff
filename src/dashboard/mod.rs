//! Dashboard data and presentation models around the balance chart.

mod format;
mod home;
mod model;
mod navigation;

pub use format::{format_currency, format_signed_amount};
pub use home::{
    HomeScreenModel, RecipientSlot, RecipientStrip, TransactionIcon, TransactionRow,
    VISIBLE_RECIPIENTS,
};
pub use model::{BankData, Recipient, Transaction};
pub use navigation::{NavItem, Navigation, Screen};
