use std::{
    any::type_name,
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    sync::{
        Arc, LazyLock, Mutex, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

struct IdentityInner {
    id: u64,
    name: String,
    collapsible: bool,
}

/// Process-unique handle naming a schema.
///
/// Two identities are equal only when they were minted by the same call to
/// [`Identity::new`]; sharing a name is not enough. Cloning is cheap and
/// preserves identity.
#[derive(Clone)]
pub struct Identity(Arc<IdentityInner>);

impl Identity {
    /// Mints a new identity token.
    ///
    /// `collapsible` marks names that may be dropped when the schema is merged
    /// into a larger composition (nested unions, intersections of structures).
    pub fn new(name: impl Into<String>, collapsible: bool) -> Self {
        Self(Arc::new(IdentityInner {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            collapsible,
        }))
    }

    /// Mints a non-collapsible identity token.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Numeric id, unique for the lifetime of the process.
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Display name of the schema.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Whether the name may be collapsed in compositions.
    pub fn is_collapsible(&self) -> bool {
        self.0.collapsible
    }

    /// The built-in kind this token stands for, if any.
    pub fn builtin(&self) -> Option<Builtin> {
        Builtin::ALL
            .into_iter()
            .find(|builtin| builtin.identity() == *self)
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("collapsible", &self.0.collapsible)
            .finish()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.0.name, self.0.id)
    }
}

/// Built-in primitive kinds.
///
/// `any` and `unknown` are the same kind and share one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Any string.
    String,
    /// Any number.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Exactly `null`.
    Null,
    /// `null` or `undefined`.
    Nullish,
    /// `undefined`, also accepting `null`.
    Undefinedish,
    /// Anything at all.
    Unknown,
    /// Any non-null object.
    Object,
    /// Not read at all.
    Ignored,
}

static BUILTINS: LazyLock<[Identity; 9]> =
    LazyLock::new(|| Builtin::ALL.map(|builtin| Identity::named(builtin.token_name())));

impl Builtin {
    /// Every built-in kind.
    pub const ALL: [Builtin; 9] = [
        Builtin::String,
        Builtin::Number,
        Builtin::Boolean,
        Builtin::Null,
        Builtin::Nullish,
        Builtin::Undefinedish,
        Builtin::Unknown,
        Builtin::Object,
        Builtin::Ignored,
    ];

    /// The process-wide token for this kind.
    pub fn identity(self) -> Identity {
        BUILTINS[self as usize].clone()
    }

    fn token_name(self) -> &'static str {
        match self {
            Builtin::String => "string",
            Builtin::Number => "number",
            Builtin::Boolean => "boolean",
            Builtin::Null => "null",
            Builtin::Nullish => "nullish",
            Builtin::Undefinedish => "undefinedish",
            Builtin::Unknown => "any",
            Builtin::Object => "object",
            Builtin::Ignored => "ignored",
        }
    }
}

static TYPE_IDENTITIES: LazyLock<Mutex<HashMap<&'static str, Identity>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Identity for a custom atomic kind backed by the Rust type `T`.
///
/// The same token is returned for every call with the same type; the token is
/// named after the last path segment of the type name.
pub fn identity_for<T: ?Sized + 'static>() -> Identity {
    let full_name = type_name::<T>();
    let mut identities = TYPE_IDENTITIES
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    identities
        .entry(full_name)
        .or_insert_with(|| Identity::named(short_type_name(full_name)))
        .clone()
}

fn short_type_name(full_name: &str) -> &str {
    let base = full_name.split('<').next().unwrap_or(full_name);
    base.rsplit("::").next().unwrap_or(base)
}
