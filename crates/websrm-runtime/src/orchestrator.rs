//! The signing pipeline.

use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use websrm_canonical::to_canonical_json_string;
use websrm_chain::{compute_body_signatures, PreviousSignatureStore};
use websrm_core::{validate_profile, ComplianceProfile, Order, ProfileSummary};
use websrm_transport::{
    build_canonical_base_string, build_official_headers, build_official_qr, resolve_test_case,
    QrOptions, TransmissionIds, HDR_EMPRCERTIFTRANSM,
};

use crate::error::RuntimeError;
use crate::mapper::map_order_to_payload;
use crate::record::WebSrmRecord;
use crate::sink::RecordSink;

/// Pipeline settings. The QR base URL has no default; the transaction
/// endpoint path does.
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    pub qr_base_url: String,
    pub transaction_path: String,
}

impl OrchestratorOptions {
    pub fn new(qr_base_url: impl Into<String>) -> Self {
        Self {
            qr_base_url: qr_base_url.into(),
            transaction_path: "/transaction".to_string(),
        }
    }

    pub fn with_transaction_path(mut self, path: impl Into<String>) -> Self {
        self.transaction_path = path.into();
        self
    }
}

/// Drives one order through mapping, chain signing, header construction
/// and QR generation, then hands the result to the sink.
pub struct Orchestrator<S: RecordSink> {
    sink: S,
    options: OrchestratorOptions,
}

impl<S: RecordSink> Orchestrator<S> {
    pub fn new(sink: S, options: OrchestratorOptions) -> Self {
        Self { sink, options }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Sign one order. `previous_actu` is the preceding transaction's
    /// chain signature for this device, or `None` for the first in the
    /// chain.
    ///
    /// The record is returned even when the sink fails; callers retry
    /// persistence with the same record rather than re-signing, which
    /// would fork the chain.
    pub async fn handle_order(
        &self,
        order: &Order,
        profile: &ComplianceProfile,
        previous_actu: Option<&str>,
    ) -> Result<WebSrmRecord, RuntimeError> {
        validate_profile(profile)?;

        let mut payload = map_order_to_payload(order)?;
        let chain_link =
            compute_body_signatures(&payload, &profile.private_key_pem, previous_actu)?;
        payload["signa"] = json!({
            "preced": chain_link.preced,
            "actu": chain_link.actu,
        });

        let body = to_canonical_json_string(&payload)?;

        let mut ids = TransmissionIds::from_profile(profile);
        ids.test_case = resolve_test_case(profile);
        let base_string =
            build_canonical_base_string("POST", &self.options.transaction_path, &body, &ids)?;
        let headers = build_official_headers(profile, &base_string)?;

        let qr_options = QrOptions::new(self.options.qr_base_url.clone());
        let qr_url = build_official_qr(&payload, &chain_link.actu, &qr_options)?;

        let certificate_fingerprint = headers
            .get(HDR_EMPRCERTIFTRANSM)
            .cloned()
            .unwrap_or_default();
        let record = WebSrmRecord {
            record_id: Uuid::new_v4(),
            payload,
            body,
            headers,
            qr_url,
            chain_link,
            profile: ProfileSummary {
                device_id: profile.device_id.clone(),
                software_id: profile.software_id.clone(),
                partner_id: profile.partner_id.clone(),
                environment: profile.environment,
                certificate_fingerprint,
            },
        };

        info!(
            order_id = %order.order_id,
            record_id = %record.record_id,
            environment = %profile.environment,
            "signed transaction record"
        );

        if let Err(e) = self.sink.persist(&record).await {
            warn!(
                record_id = %record.record_id,
                error = %e,
                "record sink failed; record returned for retry"
            );
        }

        Ok(record)
    }

    /// Like [`handle_order`](Self::handle_order), resolving and updating
    /// the previous signature through a per-device store. The store key is
    /// the device id, falling back to the software id for software-only
    /// setups.
    pub async fn handle_order_with_store(
        &self,
        order: &Order,
        profile: &ComplianceProfile,
        store: &mut dyn PreviousSignatureStore,
    ) -> Result<WebSrmRecord, RuntimeError> {
        let device_key = profile
            .device_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| profile.software_id.clone());

        let previous = store.get(&device_key);
        let record = self
            .handle_order(order, profile, previous.as_deref())
            .await?;
        store.put(&device_key, record.chain_link.actu.clone());
        Ok(record)
    }
}
