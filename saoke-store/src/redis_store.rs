use redis::Commands;
use tracing::debug;

use crate::error::StoreError;
use crate::{KeyValueSink, KeyValueSource};

/// Redis-backed store. Each call opens its own connection, which is closed
/// when the call returns.
#[derive(Debug, Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// `url` like `redis://redis:6379/0`. Nothing connects until first use.
    pub fn open(url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            client: redis::Client::open(url)?,
        })
    }

    fn connection(&self) -> Result<redis::Connection, StoreError> {
        debug!("connecting to redis");
        Ok(self.client.get_connection()?)
    }
}

impl KeyValueSink for RedisStore {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut con = self.connection()?;
        let _: () = con.set(key, value)?;
        Ok(())
    }
}

impl KeyValueSource for RedisStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let mut con = self.connection()?;
        Ok(con.get(key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rejects_bad_url() {
        assert!(matches!(
            RedisStore::open("not a url"),
            Err(StoreError::Redis(_))
        ));
    }

    #[test]
    fn test_open_does_not_connect() {
        // Port 1 is never a redis server; opening must still succeed.
        assert!(RedisStore::open("redis://127.0.0.1:1/0").is_ok());
    }
}
