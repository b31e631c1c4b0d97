use serde::Serialize;

use super::invoice::InvoiceRequest;
use super::user::User;
use crate::rpc::tl;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price {
    pub label: String,
    pub amount: i64,
}

impl Price {
    fn list_from_wire(prices: &[tl::LabeledPrice]) -> Vec<Self> {
        prices
            .iter()
            .map(|p| Self {
                label: p.label.clone(),
                amount: p.amount,
            })
            .collect()
    }
}

fn total_of(prices: &[Price]) -> i64 {
    prices.iter().fold(0i64, |acc, p| acc.saturating_add(p.amount))
}

/// Amounts are in the smallest units of `currency` (or whole stars for `XTR`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub currency: String,
    pub prices: Vec<Price>,
    pub total_amount: i64,
    pub is_test: bool,
    pub is_recurring: bool,
    pub is_flexible: bool,
    pub is_name_requested: bool,
    pub is_phone_requested: bool,
    pub is_email_requested: bool,
    pub is_shipping_address_requested: bool,
    pub is_phone_sent_to_provider: bool,
    pub is_email_sent_to_provider: bool,
    pub max_tip_amount: Option<i64>,
    pub suggested_tip_amounts: Vec<i64>,
    pub terms_url: Option<String>,
    pub subscription_period: Option<i32>,
}

impl Invoice {
    pub fn from_wire(invoice: &tl::Invoice) -> Self {
        let prices = Price::list_from_wire(&invoice.prices);
        Self {
            currency: invoice.currency.clone(),
            total_amount: total_of(&prices),
            prices,
            is_test: invoice.test,
            is_recurring: invoice.recurring,
            is_flexible: invoice.flexible,
            is_name_requested: invoice.name_requested,
            is_phone_requested: invoice.phone_requested,
            is_email_requested: invoice.email_requested,
            is_shipping_address_requested: invoice.shipping_address_requested,
            is_phone_sent_to_provider: invoice.phone_to_provider,
            is_email_sent_to_provider: invoice.email_to_provider,
            max_tip_amount: invoice.max_tip_amount,
            suggested_tip_amounts: invoice.suggested_tip_amounts.clone(),
            terms_url: invoice.terms_url.clone(),
            subscription_period: invoice.subscription_period,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShippingAddress {
    pub street_line1: String,
    pub street_line2: String,
    pub city: String,
    pub state: String,
    pub country_iso2: String,
    pub post_code: String,
}

/// Order details the buyer is asked for (name, phone, email, address).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub shipping_address: Option<ShippingAddress>,
}

impl OrderInfo {
    pub fn from_wire(info: &tl::PaymentRequestedInfo) -> Self {
        Self {
            name: info.name.clone(),
            phone: info.phone.clone(),
            email: info.email.clone(),
            shipping_address: info.shipping_address.as_ref().map(|a| ShippingAddress {
                street_line1: a.street_line1.clone(),
                street_line2: a.street_line2.clone(),
                city: a.city.clone(),
                state: a.state.clone(),
                country_iso2: a.country_iso2.clone(),
                post_code: a.post_code.clone(),
            }),
        }
    }

    pub fn to_wire(&self) -> tl::PaymentRequestedInfo {
        tl::PaymentRequestedInfo {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            shipping_address: self.shipping_address.as_ref().map(|a| tl::PostAddress {
                street_line1: a.street_line1.clone(),
                street_line2: a.street_line2.clone(),
                city: a.city.clone(),
                state: a.state.clone(),
                country_iso2: a.country_iso2.clone(),
                post_code: a.post_code.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub amount: i64,
    pub prices: Vec<Price>,
}

impl ShippingOption {
    pub fn from_wire(option: &tl::ShippingOption) -> Self {
        let prices = Price::list_from_wire(&option.prices);
        Self {
            id: option.id.clone(),
            title: option.title.clone(),
            amount: total_of(&prices),
            prices,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedInfo {
    pub id: Option<String>,
    pub shipping_options: Vec<ShippingOption>,
}

impl ValidatedInfo {
    pub fn from_wire(info: &tl::ValidatedRequestedInfo) -> Self {
        Self {
            id: info.id.clone(),
            shipping_options: info
                .shipping_options
                .iter()
                .map(ShippingOption::from_wire)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedCredentials {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularPaymentForm {
    pub form_id: i64,
    pub bot_id: i64,
    pub provider_id: i64,
    pub title: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub invoice: Invoice,
    pub url: String,
    pub native_provider: Option<String>,
    /// Raw JSON the native provider needs (publishable keys and the like)
    pub native_params: Option<String>,
    pub saved_info: Option<OrderInfo>,
    pub saved_credentials: Vec<SavedCredentials>,
    pub can_save_credentials: bool,
    pub is_password_missing: bool,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarsPaymentForm {
    pub form_id: i64,
    pub bot_id: i64,
    pub title: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub invoice: Invoice,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaymentForm {
    Regular(RegularPaymentForm),
    Stars(StarsPaymentForm),
    StarGift { form_id: i64, invoice: Invoice },
}

impl PaymentForm {
    pub fn from_wire(form: &tl::PaymentForm) -> Self {
        match form {
            tl::PaymentForm::Regular(f) => PaymentForm::Regular(RegularPaymentForm {
                form_id: f.form_id,
                bot_id: f.bot_id,
                provider_id: f.provider_id,
                title: f.title.clone(),
                description: f.description.clone(),
                photo_url: f.photo.as_ref().map(|p| p.url().to_string()),
                invoice: Invoice::from_wire(&f.invoice),
                url: f.url.clone(),
                native_provider: f.native_provider.clone(),
                native_params: f.native_params.as_ref().map(|p| p.data.clone()),
                saved_info: f.saved_info.as_ref().map(OrderInfo::from_wire),
                saved_credentials: f
                    .saved_credentials
                    .iter()
                    .map(|c| SavedCredentials {
                        id: c.id.clone(),
                        title: c.title.clone(),
                    })
                    .collect(),
                can_save_credentials: f.can_save_credentials,
                is_password_missing: f.password_missing,
                users: User::list_from_wire(&f.users),
            }),
            tl::PaymentForm::Stars(f) => PaymentForm::Stars(StarsPaymentForm {
                form_id: f.form_id,
                bot_id: f.bot_id,
                title: f.title.clone(),
                description: f.description.clone(),
                photo_url: f.photo.as_ref().map(|p| p.url().to_string()),
                invoice: Invoice::from_wire(&f.invoice),
                users: User::list_from_wire(&f.users),
            }),
            tl::PaymentForm::StarGift { form_id, invoice } => PaymentForm::StarGift {
                form_id: *form_id,
                invoice: Invoice::from_wire(invoice),
            },
        }
    }

    pub fn form_id(&self) -> i64 {
        match self {
            PaymentForm::Regular(f) => f.form_id,
            PaymentForm::Stars(f) => f.form_id,
            PaymentForm::StarGift { form_id, .. } => *form_id,
        }
    }

    pub fn invoice(&self) -> &Invoice {
        match self {
            PaymentForm::Regular(f) => &f.invoice,
            PaymentForm::Stars(f) => &f.invoice,
            PaymentForm::StarGift { invoice, .. } => invoice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentCredentials {
    /// A card saved on the server, unlocked with a temporary password
    Saved { id: String, tmp_password: Vec<u8> },
    /// Provider token JSON for a newly entered card
    New { data: String, save: bool },
    ApplePay { payment_data: String },
    GooglePay { payment_token: String },
}

impl PaymentCredentials {
    pub fn to_wire(&self) -> tl::InputPaymentCredentials {
        match self {
            PaymentCredentials::Saved { id, tmp_password } => tl::InputPaymentCredentials::Saved {
                id: id.clone(),
                tmp_password: tmp_password.clone(),
            },
            PaymentCredentials::New { data, save } => tl::InputPaymentCredentials::New {
                save: *save,
                data: tl::DataJson { data: data.clone() },
            },
            PaymentCredentials::ApplePay { payment_data } => {
                tl::InputPaymentCredentials::ApplePay {
                    payment_data: tl::DataJson {
                        data: payment_data.clone(),
                    },
                }
            }
            PaymentCredentials::GooglePay { payment_token } => {
                tl::InputPaymentCredentials::GooglePay {
                    payment_token: tl::DataJson {
                        data: payment_token.clone(),
                    },
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendPaymentFormRequest {
    pub invoice: InvoiceRequest,
    pub form_id: i64,
    pub requested_info_id: Option<String>,
    pub shipping_option_id: Option<String>,
    pub credentials: PaymentCredentials,
    pub tip_amount: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularReceipt {
    pub date: i32,
    pub bot_id: i64,
    pub provider_id: i64,
    pub title: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub invoice: Invoice,
    pub info: Option<OrderInfo>,
    pub shipping: Option<ShippingOption>,
    pub tip_amount: Option<i64>,
    pub currency: String,
    pub total_amount: i64,
    pub credentials_title: String,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarsReceipt {
    pub date: i32,
    pub bot_id: i64,
    pub title: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub invoice: Invoice,
    pub currency: String,
    pub total_amount: i64,
    pub transaction_id: String,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Receipt {
    Regular(RegularReceipt),
    Stars(StarsReceipt),
}

impl Receipt {
    pub fn from_wire(receipt: &tl::PaymentReceipt) -> Self {
        match receipt {
            tl::PaymentReceipt::Regular(r) => Receipt::Regular(RegularReceipt {
                date: r.date,
                bot_id: r.bot_id,
                provider_id: r.provider_id,
                title: r.title.clone(),
                description: r.description.clone(),
                photo_url: r.photo.as_ref().map(|p| p.url().to_string()),
                invoice: Invoice::from_wire(&r.invoice),
                info: r.info.as_ref().map(OrderInfo::from_wire),
                shipping: r.shipping.as_ref().map(ShippingOption::from_wire),
                tip_amount: r.tip_amount,
                currency: r.currency.clone(),
                total_amount: r.total_amount,
                credentials_title: r.credentials_title.clone(),
                users: User::list_from_wire(&r.users),
            }),
            tl::PaymentReceipt::Stars(r) => Receipt::Stars(StarsReceipt {
                date: r.date,
                bot_id: r.bot_id,
                title: r.title.clone(),
                description: r.description.clone(),
                photo_url: r.photo.as_ref().map(|p| p.url().to_string()),
                invoice: Invoice::from_wire(&r.invoice),
                currency: r.currency.clone(),
                total_amount: r.total_amount,
                transaction_id: r.transaction_id.clone(),
                users: User::list_from_wire(&r.users),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_invoice(prices: &[(&str, i64)]) -> tl::Invoice {
        serde_json::from_value(serde_json::json!({
            "currency": "EUR",
            "prices": prices
                .iter()
                .map(|(label, amount)| serde_json::json!({ "label": label, "amount": amount.to_string() }))
                .collect::<Vec<_>>(),
            "flexible": true,
            "suggested_tip_amounts": ["100", 200],
        }))
        .unwrap()
    }

    #[test]
    fn test_invoice_total_is_sum_of_prices() {
        let invoice = Invoice::from_wire(&wire_invoice(&[("Item", 1500), ("Tax", 300)]));
        assert_eq!(invoice.total_amount, 1800);
        assert_eq!(invoice.prices.len(), 2);
        assert!(invoice.is_flexible);
        assert!(!invoice.is_test);
        assert_eq!(invoice.suggested_tip_amounts, vec![100, 200]);
    }

    #[test]
    fn test_invoice_total_saturates() {
        let invoice = Invoice::from_wire(&wire_invoice(&[("A", i64::MAX), ("B", 1)]));
        assert_eq!(invoice.total_amount, i64::MAX);
    }

    #[test]
    fn test_order_info_round_trips_through_wire() {
        let info = OrderInfo {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            shipping_address: Some(ShippingAddress {
                street_line1: "1 Analytical Way".to_string(),
                city: "London".to_string(),
                country_iso2: "GB".to_string(),
                post_code: "N1".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(OrderInfo::from_wire(&info.to_wire()), info);
    }

    #[test]
    fn test_saved_credentials_encode_password_as_hex() {
        let wire = PaymentCredentials::Saved {
            id: "card-1".to_string(),
            tmp_password: vec![0xde, 0xad],
        }
        .to_wire();
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["_"], "inputPaymentCredentialsSaved");
        assert_eq!(json["tmp_password"], "dead");
    }
}
