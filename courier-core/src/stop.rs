//! Pending drop-offs supplied to an optimiser.

use crate::Coordinate;

/// One pending drop-off.
///
/// `order_id` must be unique within a single optimisation call. `address`
/// and `payload` are carried through to the matching
/// [`RouteStop`](crate::RouteStop) without being inspected.
///
/// # Examples
/// ```
/// use courier_core::{DeliveryStop, coordinate};
///
/// let stop = DeliveryStop::new("order-17", coordinate(52.52, 13.405))
///     .with_address("Alexanderplatz 1")
///     .with_payload(42_u32);
/// assert_eq!(stop.order_id, "order-17");
/// assert_eq!(stop.payload, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryStop<P = ()> {
    /// Caller-assigned order identifier.
    pub order_id: String,
    /// Drop-off position.
    pub location: Coordinate,
    /// Free-text address label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: Option<String>,
    /// Opaque caller data, such as the originating order record.
    #[cfg_attr(feature = "serde", serde(default))]
    pub payload: Option<P>,
}

impl<P> DeliveryStop<P> {
    /// Construct a stop with no address or payload.
    pub fn new(order_id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            order_id: order_id.into(),
            location,
            address: None,
            payload: None,
        }
    }

    /// Attach an address label.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Attach opaque caller data.
    #[must_use]
    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }
}
