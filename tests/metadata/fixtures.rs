//! Model types shared by the metadata tests.

use route_docs::{Registry, describe};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Route payload describing an account.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct Account {
    pub id: u64,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub nickname: Option<String>,
    pub owner: Owner,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct Owner {
    pub name: String,
}

/// Payload with no metadata attached beyond its field list.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct Plain {
    pub value: i32,
}

describe! {
    #[description = "A customer account"]
    Account {
        #[read_only]
        #[description = "Server-assigned identifier"]
        id,
        #[description = "User email"]
        email,
        #[rename = "createdAt"]
        #[read_only]
        created_at,
        nickname,
        owner,
    }
}

describe! {
    #[description = "Account owner"]
    Owner {
        #[description = "Full name"]
        name,
    }
}

describe! { Plain { value } }

pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register::<Account>()
        .unwrap()
        .register::<Owner>()
        .unwrap()
        .register::<Plain>()
        .unwrap();
    registry
}
