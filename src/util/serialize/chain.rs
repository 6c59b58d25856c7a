use {
    crate::domain::eth,
    serde::{Deserialize, Deserializer, de},
    serde_with::DeserializeAs,
};

/// Deserialize an [`eth::Chain`] from its numeric chain ID.
#[derive(Debug)]
pub struct ChainId;

impl<'de> DeserializeAs<'de, eth::Chain> for ChainId {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<eth::Chain, D::Error> {
        let value = u64::deserialize(deserializer)?;
        eth::Chain::new(value).map_err(de::Error::custom)
    }
}
