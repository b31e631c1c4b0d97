pub mod boosts;
pub mod gifts;
pub mod invoice;
pub mod payments;
pub mod peer;
pub mod stars;
pub mod user;

pub use boosts::{Boost, BoostsList, BoostsStatus, MyBoost, MyBoosts, PrepaidGiveaway};
pub use gifts::{GiftCodeInfo, GiveawayInfo, PremiumGiftCodeOption, StarGift};
pub use invoice::{GiveawayPurpose, InvoiceRequest};
pub use payments::{
    Invoice, OrderInfo, PaymentCredentials, PaymentForm, Price, Receipt, SendPaymentFormRequest,
    ShippingAddress, ShippingOption, ValidatedInfo,
};
pub use peer::{PeerId, PeerKind, PeerRef};
pub use stars::{
    StarsAmount, StarsStatus, StarsTopupOption, StarsTransaction, StarsTransactionPeer,
    StarsTransactionsQuery, TransactionDirection,
};
pub use user::{ContactList, User};
