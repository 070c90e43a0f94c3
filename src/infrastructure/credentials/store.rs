use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::domain::models::{Credential, CredentialResolution, SecretPresence};

/// Environment variable seeding the completion-key slot
pub const COMPLETION_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable seeding the hosting-token slot
pub const HOSTING_TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Secondary hosting-token variable, read once and never written
pub const HOSTING_TOKEN_FALLBACK_VAR: &str = "GH_TOKEN";

#[derive(Default)]
struct SecretSlots {
    completion_key: Option<Credential>,
    hosting_token: Option<Credential>,
    hosting_token_fallback: Option<Credential>,
}

/// Process-wide holder for the completion key and the hosting token.
///
/// Cloning yields another handle to the same slots. Slots can be set or
/// overwritten but never cleared.
#[derive(Clone, Default)]
pub struct SecretStore {
    slots: Arc<RwLock<SecretSlots>>,
}

static GLOBAL: OnceLock<SecretStore> = OnceLock::new();

impl SecretStore {
    /// A store with nothing in it
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed a new store from `OPENAI_API_KEY`, `GITHUB_TOKEN` and `GH_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Seed a new store from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).and_then(Credential::new);
        let slots = SecretSlots {
            completion_key: read(COMPLETION_KEY_VAR),
            hosting_token: read(HOSTING_TOKEN_VAR),
            hosting_token_fallback: read(HOSTING_TOKEN_FALLBACK_VAR),
        };
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }

    /// The process-wide store, seeded from the environment on first use.
    pub fn global() -> &'static SecretStore {
        GLOBAL.get_or_init(Self::from_env)
    }

    /// Overwrite the slots for every non-empty argument and report presence.
    ///
    /// `None` and `""` both leave the existing slot untouched.
    pub fn set_secrets(
        &self,
        completion_key: Option<&str>,
        hosting_token: Option<&str>,
    ) -> SecretPresence {
        let completion_key = completion_key.and_then(Credential::new);
        let hosting_token = hosting_token.and_then(Credential::new);

        {
            let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
            if let Some(key) = completion_key {
                slots.completion_key = Some(key);
            }
            if let Some(token) = hosting_token {
                slots.hosting_token = Some(token);
            }
        }

        let presence = self.presence();
        debug!(
            completion_key_present = presence.completion_key_present,
            hosting_token_present = presence.hosting_token_present,
            "runtime secrets updated"
        );
        presence
    }

    /// Current presence of both secrets
    pub fn presence(&self) -> SecretPresence {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        SecretPresence {
            completion_key_present: slots.completion_key.is_some(),
            hosting_token_present: slots.hosting_token.is_some()
                || slots.hosting_token_fallback.is_some(),
        }
    }

    /// True iff every required secret is present. Unrequired secrets are
    /// treated as satisfied.
    pub fn ready(&self, require_completion: bool, require_hosting: bool) -> bool {
        let presence = self.presence();
        (presence.completion_key_present || !require_completion)
            && (presence.hosting_token_present || !require_hosting)
    }

    /// Resolve the completion key: explicit argument, then the stored key.
    pub fn resolve_completion_key(&self, explicit: Option<&str>) -> CredentialResolution {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        CredentialResolution::resolve(explicit, [slots.completion_key.clone()])
    }

    /// Resolve the hosting token: explicit argument, then `GITHUB_TOKEN`, then
    /// `GH_TOKEN`.
    pub fn resolve_hosting_token(&self, explicit: Option<&str>) -> CredentialResolution {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        CredentialResolution::resolve(
            explicit,
            [
                slots.hosting_token.clone(),
                slots.hosting_token_fallback.clone(),
            ],
        )
    }
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let presence = self.presence();
        f.debug_struct("SecretStore")
            .field("completion_key_present", &presence.completion_key_present)
            .field("hosting_token_present", &presence.hosting_token_present)
            .finish()
    }
}
