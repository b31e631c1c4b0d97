use super::*;
use crate::events::CoreEvent;
use crate::models::{
    InvoiceRequest, OrderInfo, PaymentForm, PeerRef, Receipt, SendPaymentFormRequest,
    ValidatedInfo,
};
use crate::rpc::methods::{
    GetPaymentForm, GetPaymentReceipt, SendPaymentForm, SendStarsForm, ValidateRequestedInfo,
};
use crate::rpc::tl;

impl<T: Transport> CoreApi<T> {
    /// Check the order info the buyer entered and fetch shipping options for it.
    pub async fn validate_requested_info(
        &self,
        invoice: &InvoiceRequest,
        info: &OrderInfo,
        save: bool,
    ) -> Result<Option<ValidatedInfo>, RpcError> {
        let request = ValidateRequestedInfo {
            save,
            invoice: invoice.to_input_invoice(),
            info: info.to_wire(),
        };
        Ok(self
            .invoke(&request)
            .await?
            .map(|validated| ValidatedInfo::from_wire(&validated)))
    }

    /// Fetch the payment form for an invoice.
    ///
    /// `theme_params` is raw JSON forwarded to the payment provider's web page.
    pub async fn get_payment_form(
        &self,
        invoice: &InvoiceRequest,
        theme_params: Option<String>,
    ) -> Result<Option<PaymentForm>, RpcError> {
        let request = GetPaymentForm {
            invoice: invoice.to_input_invoice(),
            theme_params: theme_params.map(|data| tl::DataJson { data }),
        };
        let Some(form) = self.invoke(&request).await? else {
            return Ok(None);
        };

        let photo = match &form {
            tl::PaymentForm::Regular(f) => f.photo.as_ref(),
            tl::PaymentForm::Stars(f) => f.photo.as_ref(),
            tl::PaymentForm::StarGift { .. } => None,
        };
        if let Some(photo) = photo {
            self.media.register_web_document(photo);
        }

        Ok(Some(PaymentForm::from_wire(&form)))
    }

    /// Pay a regular invoice.
    ///
    /// When the provider asks for extra verification the URL is published as
    /// [`CoreEvent::PaymentVerificationNeeded`] and no result is returned.
    pub async fn send_payment_form(
        &self,
        form: &SendPaymentFormRequest,
    ) -> Result<Option<bool>, RpcError> {
        let request = SendPaymentForm {
            form_id: form.form_id,
            invoice: form.invoice.to_input_invoice(),
            requested_info_id: form.requested_info_id.clone(),
            shipping_option_id: form.shipping_option_id.clone(),
            credentials: form.credentials.to_wire(),
            tip_amount: form.tip_amount,
        };

        match self.invoke(&request).await? {
            None => Ok(None),
            Some(tl::PaymentResult::Done { .. }) => Ok(Some(true)),
            Some(tl::PaymentResult::VerificationNeeded { url }) => {
                tracing::info!(form_id = form.form_id, "payment needs verification");
                self.notifier
                    .notify(CoreEvent::PaymentVerificationNeeded { url });
                Ok(None)
            }
        }
    }

    /// Pay an invoice in stars.
    pub async fn send_stars_payment_form(
        &self,
        invoice: &InvoiceRequest,
        form_id: i64,
    ) -> Result<Option<bool>, RpcError> {
        let request = SendStarsForm {
            form_id,
            invoice: invoice.to_input_invoice(),
        };

        match self.invoke(&request).await? {
            None => Ok(None),
            Some(tl::PaymentResult::Done { .. }) => Ok(Some(true)),
            Some(tl::PaymentResult::VerificationNeeded { url }) => {
                // Stars payments are not documented to need verification
                tracing::warn!(form_id, url = %url, "unexpected verification request for stars payment");
                Ok(Some(true))
            }
        }
    }

    pub async fn get_receipt(&self, peer: PeerRef, msg_id: i32) -> Result<Option<Receipt>, RpcError> {
        let request = GetPaymentReceipt {
            peer: peer.input_peer(),
            msg_id,
        };
        let Some(receipt) = self.invoke(&request).await? else {
            return Ok(None);
        };

        let photo = match &receipt {
            tl::PaymentReceipt::Regular(r) => r.photo.as_ref(),
            tl::PaymentReceipt::Stars(r) => r.photo.as_ref(),
        };
        if let Some(photo) = photo {
            self.media.register_web_document(photo);
        }

        Ok(Some(Receipt::from_wire(&receipt)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::test_support::{Harness, MockTransport};
    use super::*;
    use crate::models::PaymentCredentials;
    use crate::store::MediaCache;

    fn slug_invoice() -> InvoiceRequest {
        InvoiceRequest::Slug {
            slug: "shop-order-1".to_string(),
        }
    }

    fn send_request() -> SendPaymentFormRequest {
        SendPaymentFormRequest {
            invoice: slug_invoice(),
            form_id: 9_007_199_254_740_993,
            requested_info_id: Some("info-1".to_string()),
            shipping_option_id: None,
            credentials: PaymentCredentials::New {
                data: r#"{"token":"tok_1"}"#.to_string(),
                save: false,
            },
            tip_amount: Some(50),
        }
    }

    #[tokio::test]
    async fn test_send_payment_form_done() {
        let mut harness = Harness::new(MockTransport::default().reply(
            "payments.sendPaymentForm",
            json!({ "_": "payments.paymentResult", "updates": {} }),
        ));

        let result = harness.api.send_payment_form(&send_request()).await.unwrap();
        assert_eq!(result, Some(true));
        assert!(harness.drain_events().is_empty());

        let params = harness.single_call("payments.sendPaymentForm");
        assert_eq!(params["form_id"], "9007199254740993");
        assert_eq!(params["tip_amount"], "50");
        assert_eq!(params["invoice"]["_"], "inputInvoiceSlug");
        assert_eq!(params["credentials"]["_"], "inputPaymentCredentials");
        assert!(params.get("shipping_option_id").is_none());
    }

    #[tokio::test]
    async fn test_send_payment_form_verification_notifies_once() {
        let url = "https://bank.example/3ds?session=a%20b&x=1";
        let mut harness = Harness::new(MockTransport::default().reply(
            "payments.sendPaymentForm",
            json!({ "_": "payments.paymentVerificationNeeded", "url": url }),
        ));

        let result = harness.api.send_payment_form(&send_request()).await.unwrap();
        assert_eq!(result, None);
        assert_eq!(
            harness.drain_events(),
            vec![CoreEvent::PaymentVerificationNeeded {
                url: url.to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_send_payment_form_absent() {
        let mut harness = Harness::new(MockTransport::default());

        let result = harness.api.send_payment_form(&send_request()).await.unwrap();
        assert_eq!(result, None);
        assert!(harness.drain_events().is_empty());
        assert!(harness.api.media().is_empty());
        harness.single_call("payments.sendPaymentForm");
    }

    #[tokio::test]
    async fn test_stars_form_verification_falls_through() {
        let mut harness = Harness::new(MockTransport::default().reply(
            "payments.sendStarsForm",
            json!({ "_": "payments.paymentVerificationNeeded", "url": "https://unexpected.example" }),
        ));

        let result = harness
            .api
            .send_stars_payment_form(&slug_invoice(), 77)
            .await
            .unwrap();
        assert_eq!(result, Some(true));
        assert!(harness.drain_events().is_empty());

        let params = harness.single_call("payments.sendStarsForm");
        assert_eq!(params["form_id"], "77");
    }

    #[tokio::test]
    async fn test_stars_form_absent() {
        let mut harness = Harness::new(MockTransport::default());

        let result = harness
            .api
            .send_stars_payment_form(&slug_invoice(), 77)
            .await
            .unwrap();
        assert_eq!(result, None);
        assert!(harness.drain_events().is_empty());
        assert!(harness.api.media().is_empty());
        harness.single_call("payments.sendStarsForm");
    }

    #[tokio::test]
    async fn test_get_receipt_absent_registers_nothing() {
        let mut harness = Harness::new(MockTransport::default());

        let receipt = harness
            .api
            .get_receipt(PeerRef::User { id: 500, access_hash: 9 }, 12)
            .await
            .unwrap();
        assert!(receipt.is_none());
        assert!(harness.api.media().is_empty());
        assert!(harness.drain_events().is_empty());
        harness.single_call("payments.getPaymentReceipt");
    }

    #[tokio::test]
    async fn test_get_payment_form_registers_photo() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.getPaymentForm",
            json!({
                "_": "payments.paymentForm",
                "form_id": "12",
                "bot_id": 400,
                "title": "Coffee",
                "description": "Large flat white",
                "photo": {
                    "_": "webDocumentNoProxy",
                    "url": "https://shop.example/coffee.jpg",
                    "size": 2048,
                    "mime_type": "image/jpeg"
                },
                "invoice": {
                    "currency": "EUR",
                    "prices": [
                        { "label": "Coffee", "amount": "350" },
                        { "label": "Oat milk", "amount": 50 }
                    ],
                    "max_tip_amount": "1000",
                    "email_requested": true
                },
                "provider_id": "1",
                "url": "https://pay.example/form",
                "saved_credentials": [{ "id": "c1", "title": "Visa *4242" }],
                "users": [
                    { "_": "user", "id": 400, "first_name": "Coffee Bot", "bot": true },
                    { "_": "userEmpty", "id": 401 }
                ]
            }),
        ));

        let form = harness
            .api
            .get_payment_form(&slug_invoice(), Some("{}".to_string()))
            .await
            .unwrap()
            .unwrap();

        let PaymentForm::Regular(form) = form else {
            panic!("expected regular form");
        };
        assert_eq!(form.form_id, 12);
        assert_eq!(form.invoice.total_amount, 400);
        assert_eq!(form.invoice.max_tip_amount, Some(1000));
        assert!(form.invoice.is_email_requested);
        assert_eq!(form.photo_url.as_deref(), Some("https://shop.example/coffee.jpg"));
        assert_eq!(form.saved_credentials.len(), 1);
        assert_eq!(form.users.len(), 1);
        assert!(form.users[0].is_bot);

        assert!(harness
            .api
            .media()
            .contains(&MediaCache::web_document_key("https://shop.example/coffee.jpg")));
        let params = harness.single_call("payments.getPaymentForm");
        assert_eq!(params["theme_params"]["data"], "{}");
    }

    #[tokio::test]
    async fn test_get_payment_form_absent_registers_nothing() {
        let mut harness = Harness::new(MockTransport::default());

        let form = harness
            .api
            .get_payment_form(&slug_invoice(), None)
            .await
            .unwrap();
        assert!(form.is_none());
        assert!(harness.api.media().is_empty());
        assert!(harness.drain_events().is_empty());
        let params = harness.single_call("payments.getPaymentForm");
        assert!(params.get("theme_params").is_none());
    }

    #[tokio::test]
    async fn test_validate_requested_info() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.validateRequestedInfo",
            json!({
                "id": "validated-1",
                "shipping_options": [{
                    "id": "express",
                    "title": "Express",
                    "prices": [{ "label": "Express", "amount": "1200" }, { "label": "Insurance", "amount": "300" }]
                }]
            }),
        ));

        let info = OrderInfo {
            name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        };
        let validated = harness
            .api
            .validate_requested_info(&slug_invoice(), &info, true)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(validated.id.as_deref(), Some("validated-1"));
        assert_eq!(validated.shipping_options[0].amount, 1500);

        let params = harness.single_call("payments.validateRequestedInfo");
        assert_eq!(params["save"], true);
        assert_eq!(params["info"]["name"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_get_stars_receipt() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.getPaymentReceipt",
            json!({
                "_": "payments.paymentReceiptStars",
                "date": 1700000000,
                "bot_id": "500",
                "title": "Sticker pack",
                "description": "Animated",
                "invoice": { "currency": "XTR", "prices": [{ "label": "Pack", "amount": 25 }] },
                "currency": "XTR",
                "total_amount": "25",
                "transaction_id": "tx-9"
            }),
        ));

        let receipt = harness
            .api
            .get_receipt(PeerRef::User { id: 500, access_hash: 1 }, 33)
            .await
            .unwrap()
            .unwrap();

        let Receipt::Stars(receipt) = receipt else {
            panic!("expected stars receipt");
        };
        assert_eq!(receipt.total_amount, 25);
        assert_eq!(receipt.transaction_id, "tx-9");
        assert!(harness.api.media().is_empty());
        assert_eq!(harness.single_call("payments.getPaymentReceipt")["msg_id"], 33);
    }

    #[tokio::test]
    async fn test_out_of_range_amount_is_decode_error() {
        let harness = Harness::new(MockTransport::default().reply(
            "payments.getPaymentReceipt",
            json!({
                "_": "payments.paymentReceiptStars",
                "date": 1,
                "bot_id": "500",
                "title": "t",
                "description": "d",
                "invoice": { "currency": "XTR" },
                "currency": "XTR",
                "total_amount": "9223372036854775808",
                "transaction_id": "tx"
            }),
        ));

        let err = harness
            .api
            .get_receipt(PeerRef::Myself, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::Decode { .. }));
    }
}
