use bertcodec_term::{decode_term_with, encode_term_with, TermConfig};
use bertcodec_value::{Result, Value};
use bytes::Bytes;
use tracing::{debug, trace};

/// Encode a value to BERT bytes with the default configuration.
pub fn encode(value: &Value) -> Result<Bytes> {
    BertCodec::new().encode(value)
}

/// Decode BERT bytes to a value with the default configuration.
///
/// The input is only borrowed; decoding never modifies it.
pub fn decode(data: &[u8]) -> Result<Value> {
    BertCodec::new().decode(data)
}

/// BERT codec: value mapping composed with the primitive term codec.
#[derive(Debug, Clone, Default)]
pub struct BertCodec {
    config: TermConfig,
}

impl BertCodec {
    /// Create a codec with default limits.
    pub fn new() -> Self {
        Self::with_config(TermConfig::default())
    }

    /// Create a codec with explicit limits.
    pub fn with_config(config: TermConfig) -> Self {
        Self { config }
    }

    /// Current codec configuration.
    pub fn config(&self) -> &TermConfig {
        &self.config
    }

    /// Encode a value to BERT bytes.
    pub fn encode(&self, value: &Value) -> Result<Bytes> {
        let term = bertcodec_value::encode(value).inspect_err(|err| {
            debug!(kind = value.type_name(), error = %err, "bert encode failed");
        })?;
        let bytes = encode_term_with(&term, &self.config)?;
        trace!(kind = value.type_name(), len = bytes.len(), "bert encoded");
        Ok(bytes)
    }

    /// Decode BERT bytes to a value.
    ///
    /// Primitive format errors surface unchanged as
    /// [`BertError::Term`](bertcodec_value::BertError::Term).
    pub fn decode(&self, data: &[u8]) -> Result<Value> {
        let term = decode_term_with(data, &self.config)?;
        let value = bertcodec_value::decode(&term)?;
        trace!(kind = value.type_name(), len = data.len(), "bert decoded");
        Ok(value)
    }
}
