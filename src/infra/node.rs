//! Access to the fee data of the configured chain's JSON-RPC node.

use {crate::domain::eth, web3::types::CallRequest};

/// A JSON-RPC node client used to fetch gas fee data. The node never signs
/// or broadcasts anything on our behalf.
pub struct Node {
    web3: web3::Web3<web3::transports::Http>,
}

impl Node {
    pub fn new(url: &reqwest::Url) -> Result<Self, web3::Error> {
        let transport = web3::transports::Http::new(url.as_str())?;
        Ok(Self {
            web3: web3::Web3::new(transport),
        })
    }

    /// Fetches the current gas price and a gas limit estimate for a plain
    /// value transfer. The two calls are independent and run concurrently.
    pub async fn fee_data(
        &self,
        from: Option<eth::Address>,
        to: eth::Address,
        value: eth::Ether,
    ) -> Result<(eth::GasPrice, eth::Gas), web3::Error> {
        let request = CallRequest {
            from,
            to: Some(to),
            value: Some(value.0),
            ..Default::default()
        };
        let (gas_price, gas_limit) = futures::try_join!(
            self.web3.eth().gas_price(),
            self.web3.eth().estimate_gas(request, None),
        )?;
        Ok((gas_price.into(), gas_limit.into()))
    }
}
