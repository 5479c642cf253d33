use redis::aio::MultiplexedConnection;

/// Redis-backed cache driver over an established multiplexed connection.
///
/// Expiration is delegated to the engine, so a lapsed key is reported as not
/// found rather than expired. Sub-second lifetimes round up to one second,
/// keeping every positive lifetime an expiring one. Flush clears the
/// connection's selected database, never the whole server.
#[derive(Debug, Clone)]
pub struct RedisCache {
    pub(crate) connection: MultiplexedConnection,
}
