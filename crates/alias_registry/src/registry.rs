//! The alias registry: three memoized projections over enum metadata.

use std::any::TypeId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::cache::MemoMap;
use crate::discovery;
use crate::error::UnsupportedTypeError;
use crate::key::{MemberKey, TextKey};
use crate::resolution::{Resolution, Resolved};
use crate::shape::{Described, EnumShape};

/// Sizing for the registry's caches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Initial capacity of each cache.
    pub capacity: usize,
    /// Number of lock shards per cache. Must be a power of two greater than
    /// one; anything else falls back to the default sharding.
    pub shard_amount: Option<usize>,
}

impl RegistryConfig {
    fn valid_shard_amount(&self) -> Option<usize> {
        self.shard_amount
            .filter(|&shards| shards > 1 && shards.is_power_of_two())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            capacity: 64,
            shard_amount: None,
        }
    }
}

/// Snapshot of cache sizes and work done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Retained value → alias entries.
    pub aliases: usize,
    /// Retained alias → value entries.
    pub values: usize,
    /// Retained per-type alias lists.
    pub lists: usize,
    /// Metadata scans performed, including ones discarded after a race.
    pub scans: usize,
}

/// Memoized translation between enum members and their string aliases.
///
/// # Thread Safety
/// All operations take `&self` and may be called from any number of
/// threads. For a given key every caller observes the same result.
pub struct AliasRegistry {
    value_to_alias: MemoMap<MemberKey, &'static str>,
    alias_to_value: MemoMap<TextKey, Option<Resolved>>,
    all_aliases: MemoMap<TypeId, Arc<[&'static str]>>,
    scans: AtomicUsize,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let shards = config.valid_shard_amount();
        AliasRegistry {
            value_to_alias: MemoMap::new("value_to_alias", config.capacity, shards),
            alias_to_value: MemoMap::new("alias_to_value", config.capacity, shards),
            all_aliases: MemoMap::new("all_aliases", config.capacity, shards),
            scans: AtomicUsize::new(0),
        }
    }

    /// Alias declared on `value`, or `""` if it has none.
    pub fn get_alias<T: Described>(
        &self,
        value: &T,
    ) -> Result<&'static str, UnsupportedTypeError> {
        let shape = enum_shape::<T>()?;
        let index = value.variant_index().ok_or_else(unsupported::<T>)?;

        let key = MemberKey {
            ty: TypeId::of::<T>(),
            index,
        };
        Ok(self.value_to_alias.get_or_compute(key, || {
            self.record_scan::<T>("value_to_alias");
            discovery::alias_of(&shape, index)
        }))
    }

    /// Member of `T` named by `text`, or `T`'s sentinel member if nothing
    /// matches.
    pub fn to_enum<T: Described>(&self, text: &str) -> Result<T, UnsupportedTypeError> {
        self.resolve(text).map(Resolution::into_value)
    }

    /// Like [`to_enum`](Self::to_enum), but reports which step matched.
    ///
    /// Keys are the case-folded raw text: `" uk"` and `"uk"` are cached
    /// separately even though they may resolve to the same member.
    pub fn resolve<T: Described>(
        &self,
        text: &str,
    ) -> Result<Resolution<T>, UnsupportedTypeError> {
        let shape = enum_shape::<T>()?;

        let key = TextKey::folded(TypeId::of::<T>(), text);
        let resolved = self.alias_to_value.get_or_compute(key, || {
            self.record_scan::<T>("alias_to_value");
            discovery::resolve(&shape, text)
        });

        resolved
            .and_then(|resolved| T::from_variant_index(resolved.index).map(|v| resolved.wrap(v)))
            .ok_or_else(unsupported::<T>)
    }

    /// Every alias of `value`'s type, in declaration order.
    ///
    /// The list is per type; any member of the type returns the same one.
    pub fn get_enum_aliases<T: Described>(
        &self,
        value: &T,
    ) -> Result<Arc<[&'static str]>, UnsupportedTypeError> {
        value.variant_index().ok_or_else(unsupported::<T>)?;
        self.aliases_of::<T>()
    }

    /// Every alias of `T`, in declaration order, without needing a member.
    pub fn aliases_of<T: Described>(&self) -> Result<Arc<[&'static str]>, UnsupportedTypeError> {
        let shape = enum_shape::<T>()?;
        Ok(self.all_aliases.get_or_compute(TypeId::of::<T>(), || {
            self.record_scan::<T>("all_aliases");
            discovery::alias_list(&shape).into()
        }))
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            aliases: self.value_to_alias.len(),
            values: self.alias_to_value.len(),
            lists: self.all_aliases.len(),
            scans: self.scans.load(Ordering::Relaxed),
        }
    }

    fn record_scan<T: Described>(&self, projection: &'static str) {
        // Relaxed: a diagnostic counter, not a synchronization point
        self.scans.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(ty = T::SHAPE.type_name, projection, "scanning enum metadata");
    }
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The member table of `T`, or an error if `T` is not an enum.
fn enum_shape<T: Described>() -> Result<EnumShape, UnsupportedTypeError> {
    T::SHAPE.as_enum().copied().ok_or_else(unsupported::<T>)
}

fn unsupported<T: Described>() -> UnsupportedTypeError {
    tracing::debug!(ty = T::SHAPE.type_name, "rejected non-enum type");
    UnsupportedTypeError::for_shape(&T::SHAPE)
}

/// Shared registry for alias lookups across threads.
///
/// This newtype is the one way to hand a registry to several owners;
/// borrow `&AliasRegistry` when a single owner outlives every caller.
#[derive(Clone, Default)]
pub struct SharedRegistry(Arc<AliasRegistry>);

impl SharedRegistry {
    pub fn new() -> Self {
        SharedRegistry(Arc::new(AliasRegistry::new()))
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        SharedRegistry(Arc::new(AliasRegistry::with_config(config)))
    }
}

impl std::ops::Deref for SharedRegistry {
    type Target = AliasRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
