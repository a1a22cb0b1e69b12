//! # Engine Flags
//!
//! [`SzFlags`] selects which optional sections the engine includes in a response. The bit
//! positions and the named presets are fixed by the engine and must match it bit for bit.
//!
//! ```rust
//! use sz_grpc_core::SzFlags;
//!
//! let flags = SzFlags::ENTITY_INCLUDE_ENTITY_NAME | SzFlags::ENTITY_INCLUDE_RECORD_SUMMARY;
//! assert!(flags.contains(SzFlags::ENTITY_INCLUDE_ENTITY_NAME));
//!
//! let same = SzFlags::from_names(["SZ_ENTITY_INCLUDE_ENTITY_NAME", "SZ_ENTITY_INCLUDE_RECORD_SUMMARY"]).unwrap();
//! assert_eq!(flags, same);
//! ```
use crate::error::SzError;
use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SzFlags(u64);

impl SzFlags {
    pub const NO_FLAGS: SzFlags = SzFlags(0);

    // Export selection
    pub const EXPORT_INCLUDE_MULTI_RECORD_ENTITIES: SzFlags = SzFlags(1 << 0);
    pub const EXPORT_INCLUDE_POSSIBLY_SAME: SzFlags = SzFlags(1 << 1);
    pub const EXPORT_INCLUDE_POSSIBLY_RELATED: SzFlags = SzFlags(1 << 2);
    pub const EXPORT_INCLUDE_NAME_ONLY: SzFlags = SzFlags(1 << 3);
    pub const EXPORT_INCLUDE_DISCLOSED: SzFlags = SzFlags(1 << 4);
    pub const EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES: SzFlags = SzFlags(1 << 5);

    // Entity details
    pub const ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS: SzFlags = SzFlags(1 << 6);
    pub const ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS: SzFlags = SzFlags(1 << 7);
    pub const ENTITY_INCLUDE_NAME_ONLY_RELATIONS: SzFlags = SzFlags(1 << 8);
    pub const ENTITY_INCLUDE_DISCLOSED_RELATIONS: SzFlags = SzFlags(1 << 9);
    pub const ENTITY_INCLUDE_ALL_FEATURES: SzFlags = SzFlags(1 << 10);
    pub const ENTITY_INCLUDE_REPRESENTATIVE_FEATURES: SzFlags = SzFlags(1 << 11);
    pub const ENTITY_INCLUDE_ENTITY_NAME: SzFlags = SzFlags(1 << 12);
    pub const ENTITY_INCLUDE_RECORD_SUMMARY: SzFlags = SzFlags(1 << 13);
    pub const ENTITY_INCLUDE_RECORD_DATA: SzFlags = SzFlags(1 << 14);
    pub const ENTITY_INCLUDE_RECORD_MATCHING_INFO: SzFlags = SzFlags(1 << 15);
    pub const ENTITY_INCLUDE_RECORD_JSON_DATA: SzFlags = SzFlags(1 << 16);
    pub const ENTITY_INCLUDE_RECORD_FORMATTED_DATA: SzFlags = SzFlags(1 << 17);
    pub const ENTITY_INCLUDE_RECORD_FEATURES: SzFlags = SzFlags(1 << 18);
    pub const ENTITY_INCLUDE_RELATED_ENTITY_NAME: SzFlags = SzFlags(1 << 19);
    pub const ENTITY_INCLUDE_RELATED_MATCHING_INFO: SzFlags = SzFlags(1 << 20);
    pub const ENTITY_INCLUDE_RELATED_RECORD_SUMMARY: SzFlags = SzFlags(1 << 21);
    pub const ENTITY_INCLUDE_RELATED_RECORD_DATA: SzFlags = SzFlags(1 << 22);
    pub const ENTITY_INCLUDE_INTERNAL_FEATURES: SzFlags = SzFlags(1 << 23);
    pub const ENTITY_INCLUDE_FEATURE_STATS: SzFlags = SzFlags(1 << 24);
    pub const FIND_PATH_PREFER_EXCLUDE: SzFlags = SzFlags(1 << 25);
    pub const INCLUDE_FEATURE_SCORES: SzFlags = SzFlags(1 << 26);
    pub const SEARCH_INCLUDE_STATS: SzFlags = SzFlags(1 << 27);
    pub const ENTITY_INCLUDE_RECORD_TYPES: SzFlags = SzFlags(1 << 28);
    pub const FIND_PATH_INCLUDE_MATCHING_INFO: SzFlags = SzFlags(1 << 30);
    pub const ENTITY_INCLUDE_RECORD_UNMAPPED_DATA: SzFlags = SzFlags(1 << 31);
    pub const FIND_NETWORK_INCLUDE_MATCHING_INFO: SzFlags = SzFlags(1 << 33);
    pub const INCLUDE_MATCH_KEY_DETAILS: SzFlags = SzFlags(1 << 34);
    pub const SEARCH_INCLUDE_REQUEST: SzFlags = SzFlags(1 << 37);
    pub const SEARCH_INCLUDE_REQUEST_DETAILS: SzFlags = SzFlags(1 << 38);

    /// Asks mutating engine calls to return the entities they affected.
    pub const WITH_INFO: SzFlags = SzFlags(1 << 62);

    // Search selection shares the export bits.
    pub const SEARCH_INCLUDE_RESOLVED: SzFlags = Self::EXPORT_INCLUDE_MULTI_RECORD_ENTITIES;
    pub const SEARCH_INCLUDE_POSSIBLY_SAME: SzFlags = Self::EXPORT_INCLUDE_POSSIBLY_SAME;
    pub const SEARCH_INCLUDE_POSSIBLY_RELATED: SzFlags = Self::EXPORT_INCLUDE_POSSIBLY_RELATED;
    pub const SEARCH_INCLUDE_NAME_ONLY: SzFlags = Self::EXPORT_INCLUDE_NAME_ONLY;

    // Unions
    pub const EXPORT_INCLUDE_ALL_ENTITIES: SzFlags = Self::EXPORT_INCLUDE_MULTI_RECORD_ENTITIES
        .union(Self::EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES);
    pub const EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS: SzFlags = Self::EXPORT_INCLUDE_POSSIBLY_SAME
        .union(Self::EXPORT_INCLUDE_POSSIBLY_RELATED)
        .union(Self::EXPORT_INCLUDE_NAME_ONLY)
        .union(Self::EXPORT_INCLUDE_DISCLOSED);
    pub const ENTITY_INCLUDE_ALL_RELATIONS: SzFlags = Self::ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS
        .union(Self::ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS)
        .union(Self::ENTITY_INCLUDE_NAME_ONLY_RELATIONS)
        .union(Self::ENTITY_INCLUDE_DISCLOSED_RELATIONS);
    pub const SEARCH_INCLUDE_ALL_ENTITIES: SzFlags = Self::SEARCH_INCLUDE_RESOLVED
        .union(Self::SEARCH_INCLUDE_POSSIBLY_SAME)
        .union(Self::SEARCH_INCLUDE_POSSIBLY_RELATED)
        .union(Self::SEARCH_INCLUDE_NAME_ONLY);

    // Presets
    pub const RECORD_DEFAULT_FLAGS: SzFlags = Self::ENTITY_INCLUDE_RECORD_JSON_DATA;
    pub const ENTITY_CORE_FLAGS: SzFlags = Self::ENTITY_INCLUDE_REPRESENTATIVE_FEATURES
        .union(Self::ENTITY_INCLUDE_ENTITY_NAME)
        .union(Self::ENTITY_INCLUDE_RECORD_SUMMARY)
        .union(Self::ENTITY_INCLUDE_RECORD_DATA)
        .union(Self::ENTITY_INCLUDE_RECORD_MATCHING_INFO);
    pub const ENTITY_DEFAULT_FLAGS: SzFlags = Self::ENTITY_CORE_FLAGS
        .union(Self::ENTITY_INCLUDE_ALL_RELATIONS)
        .union(Self::ENTITY_INCLUDE_RELATED_ENTITY_NAME)
        .union(Self::ENTITY_INCLUDE_RELATED_RECORD_SUMMARY)
        .union(Self::ENTITY_INCLUDE_RELATED_MATCHING_INFO);
    pub const ENTITY_BRIEF_DEFAULT_FLAGS: SzFlags = Self::ENTITY_INCLUDE_RECORD_MATCHING_INFO
        .union(Self::ENTITY_INCLUDE_ALL_RELATIONS)
        .union(Self::ENTITY_INCLUDE_RELATED_MATCHING_INFO);
    pub const EXPORT_DEFAULT_FLAGS: SzFlags =
        Self::EXPORT_INCLUDE_ALL_ENTITIES.union(Self::ENTITY_DEFAULT_FLAGS);
    pub const FIND_PATH_DEFAULT_FLAGS: SzFlags = Self::FIND_PATH_INCLUDE_MATCHING_INFO
        .union(Self::ENTITY_INCLUDE_ENTITY_NAME)
        .union(Self::ENTITY_INCLUDE_RECORD_SUMMARY);
    pub const FIND_NETWORK_DEFAULT_FLAGS: SzFlags = Self::FIND_NETWORK_INCLUDE_MATCHING_INFO
        .union(Self::ENTITY_INCLUDE_ENTITY_NAME)
        .union(Self::ENTITY_INCLUDE_RECORD_SUMMARY);
    pub const FIND_INTERESTING_ENTITIES_DEFAULT_FLAGS: SzFlags = Self::NO_FLAGS;
    pub const WHY_ENTITIES_DEFAULT_FLAGS: SzFlags = Self::INCLUDE_FEATURE_SCORES;
    pub const WHY_RECORDS_DEFAULT_FLAGS: SzFlags = Self::INCLUDE_FEATURE_SCORES;
    pub const WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS: SzFlags = Self::INCLUDE_FEATURE_SCORES;
    pub const WHY_SEARCH_DEFAULT_FLAGS: SzFlags = Self::INCLUDE_FEATURE_SCORES
        .union(Self::SEARCH_INCLUDE_REQUEST_DETAILS)
        .union(Self::SEARCH_INCLUDE_STATS);
    pub const HOW_ENTITY_DEFAULT_FLAGS: SzFlags = Self::INCLUDE_FEATURE_SCORES;
    pub const VIRTUAL_ENTITY_DEFAULT_FLAGS: SzFlags = Self::ENTITY_CORE_FLAGS;
    pub const SEARCH_BY_ATTRIBUTES_ALL: SzFlags = Self::SEARCH_INCLUDE_ALL_ENTITIES
        .union(Self::ENTITY_INCLUDE_REPRESENTATIVE_FEATURES)
        .union(Self::ENTITY_INCLUDE_ENTITY_NAME)
        .union(Self::ENTITY_INCLUDE_RECORD_SUMMARY)
        .union(Self::INCLUDE_FEATURE_SCORES);
    pub const SEARCH_BY_ATTRIBUTES_STRONG: SzFlags = Self::SEARCH_INCLUDE_RESOLVED
        .union(Self::SEARCH_INCLUDE_POSSIBLY_SAME)
        .union(Self::ENTITY_INCLUDE_REPRESENTATIVE_FEATURES)
        .union(Self::ENTITY_INCLUDE_ENTITY_NAME)
        .union(Self::ENTITY_INCLUDE_RECORD_SUMMARY)
        .union(Self::INCLUDE_FEATURE_SCORES);
    pub const SEARCH_BY_ATTRIBUTES_MINIMAL_ALL: SzFlags = Self::SEARCH_INCLUDE_ALL_ENTITIES;
    pub const SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG: SzFlags =
        Self::SEARCH_INCLUDE_RESOLVED.union(Self::SEARCH_INCLUDE_POSSIBLY_SAME);
    pub const SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS: SzFlags = Self::SEARCH_BY_ATTRIBUTES_ALL;
    pub const ADD_RECORD_DEFAULT_FLAGS: SzFlags = Self::NO_FLAGS;
    pub const DELETE_RECORD_DEFAULT_FLAGS: SzFlags = Self::NO_FLAGS;
    pub const REEVALUATE_ENTITY_DEFAULT_FLAGS: SzFlags = Self::NO_FLAGS;
    pub const REEVALUATE_RECORD_DEFAULT_FLAGS: SzFlags = Self::NO_FLAGS;
    pub const PREPROCESS_RECORD_DEFAULT_FLAGS: SzFlags = Self::ENTITY_INCLUDE_RECORD_FEATURES;
    pub const REDO_DEFAULT_FLAGS: SzFlags = Self::NO_FLAGS;

    /// Every symbolic name accepted by [`SzFlags::from_name`].
    pub const NAMED: &'static [(&'static str, SzFlags)] = &[
        ("SZ_NO_FLAGS", Self::NO_FLAGS),
        ("SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES", Self::EXPORT_INCLUDE_MULTI_RECORD_ENTITIES),
        ("SZ_EXPORT_INCLUDE_POSSIBLY_SAME", Self::EXPORT_INCLUDE_POSSIBLY_SAME),
        ("SZ_EXPORT_INCLUDE_POSSIBLY_RELATED", Self::EXPORT_INCLUDE_POSSIBLY_RELATED),
        ("SZ_EXPORT_INCLUDE_NAME_ONLY", Self::EXPORT_INCLUDE_NAME_ONLY),
        ("SZ_EXPORT_INCLUDE_DISCLOSED", Self::EXPORT_INCLUDE_DISCLOSED),
        ("SZ_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES", Self::EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES),
        ("SZ_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS", Self::ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS),
        ("SZ_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS", Self::ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS),
        ("SZ_ENTITY_INCLUDE_NAME_ONLY_RELATIONS", Self::ENTITY_INCLUDE_NAME_ONLY_RELATIONS),
        ("SZ_ENTITY_INCLUDE_DISCLOSED_RELATIONS", Self::ENTITY_INCLUDE_DISCLOSED_RELATIONS),
        ("SZ_ENTITY_INCLUDE_ALL_FEATURES", Self::ENTITY_INCLUDE_ALL_FEATURES),
        ("SZ_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES", Self::ENTITY_INCLUDE_REPRESENTATIVE_FEATURES),
        ("SZ_ENTITY_INCLUDE_ENTITY_NAME", Self::ENTITY_INCLUDE_ENTITY_NAME),
        ("SZ_ENTITY_INCLUDE_RECORD_SUMMARY", Self::ENTITY_INCLUDE_RECORD_SUMMARY),
        ("SZ_ENTITY_INCLUDE_RECORD_DATA", Self::ENTITY_INCLUDE_RECORD_DATA),
        ("SZ_ENTITY_INCLUDE_RECORD_MATCHING_INFO", Self::ENTITY_INCLUDE_RECORD_MATCHING_INFO),
        ("SZ_ENTITY_INCLUDE_RECORD_JSON_DATA", Self::ENTITY_INCLUDE_RECORD_JSON_DATA),
        ("SZ_ENTITY_INCLUDE_RECORD_FORMATTED_DATA", Self::ENTITY_INCLUDE_RECORD_FORMATTED_DATA),
        ("SZ_ENTITY_INCLUDE_RECORD_FEATURES", Self::ENTITY_INCLUDE_RECORD_FEATURES),
        ("SZ_ENTITY_INCLUDE_RELATED_ENTITY_NAME", Self::ENTITY_INCLUDE_RELATED_ENTITY_NAME),
        ("SZ_ENTITY_INCLUDE_RELATED_MATCHING_INFO", Self::ENTITY_INCLUDE_RELATED_MATCHING_INFO),
        ("SZ_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY", Self::ENTITY_INCLUDE_RELATED_RECORD_SUMMARY),
        ("SZ_ENTITY_INCLUDE_RELATED_RECORD_DATA", Self::ENTITY_INCLUDE_RELATED_RECORD_DATA),
        ("SZ_ENTITY_INCLUDE_INTERNAL_FEATURES", Self::ENTITY_INCLUDE_INTERNAL_FEATURES),
        ("SZ_ENTITY_INCLUDE_FEATURE_STATS", Self::ENTITY_INCLUDE_FEATURE_STATS),
        ("SZ_FIND_PATH_PREFER_EXCLUDE", Self::FIND_PATH_PREFER_EXCLUDE),
        ("SZ_INCLUDE_FEATURE_SCORES", Self::INCLUDE_FEATURE_SCORES),
        ("SZ_SEARCH_INCLUDE_STATS", Self::SEARCH_INCLUDE_STATS),
        ("SZ_ENTITY_INCLUDE_RECORD_TYPES", Self::ENTITY_INCLUDE_RECORD_TYPES),
        ("SZ_FIND_PATH_INCLUDE_MATCHING_INFO", Self::FIND_PATH_INCLUDE_MATCHING_INFO),
        ("SZ_ENTITY_INCLUDE_RECORD_UNMAPPED_DATA", Self::ENTITY_INCLUDE_RECORD_UNMAPPED_DATA),
        ("SZ_FIND_NETWORK_INCLUDE_MATCHING_INFO", Self::FIND_NETWORK_INCLUDE_MATCHING_INFO),
        ("SZ_INCLUDE_MATCH_KEY_DETAILS", Self::INCLUDE_MATCH_KEY_DETAILS),
        ("SZ_SEARCH_INCLUDE_REQUEST", Self::SEARCH_INCLUDE_REQUEST),
        ("SZ_SEARCH_INCLUDE_REQUEST_DETAILS", Self::SEARCH_INCLUDE_REQUEST_DETAILS),
        ("SZ_WITH_INFO", Self::WITH_INFO),
        ("SZ_SEARCH_INCLUDE_RESOLVED", Self::SEARCH_INCLUDE_RESOLVED),
        ("SZ_SEARCH_INCLUDE_POSSIBLY_SAME", Self::SEARCH_INCLUDE_POSSIBLY_SAME),
        ("SZ_SEARCH_INCLUDE_POSSIBLY_RELATED", Self::SEARCH_INCLUDE_POSSIBLY_RELATED),
        ("SZ_SEARCH_INCLUDE_NAME_ONLY", Self::SEARCH_INCLUDE_NAME_ONLY),
        ("SZ_EXPORT_INCLUDE_ALL_ENTITIES", Self::EXPORT_INCLUDE_ALL_ENTITIES),
        ("SZ_EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS", Self::EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS),
        ("SZ_ENTITY_INCLUDE_ALL_RELATIONS", Self::ENTITY_INCLUDE_ALL_RELATIONS),
        ("SZ_SEARCH_INCLUDE_ALL_ENTITIES", Self::SEARCH_INCLUDE_ALL_ENTITIES),
        ("SZ_RECORD_DEFAULT_FLAGS", Self::RECORD_DEFAULT_FLAGS),
        ("SZ_ENTITY_CORE_FLAGS", Self::ENTITY_CORE_FLAGS),
        ("SZ_ENTITY_DEFAULT_FLAGS", Self::ENTITY_DEFAULT_FLAGS),
        ("SZ_ENTITY_BRIEF_DEFAULT_FLAGS", Self::ENTITY_BRIEF_DEFAULT_FLAGS),
        ("SZ_EXPORT_DEFAULT_FLAGS", Self::EXPORT_DEFAULT_FLAGS),
        ("SZ_FIND_PATH_DEFAULT_FLAGS", Self::FIND_PATH_DEFAULT_FLAGS),
        ("SZ_FIND_NETWORK_DEFAULT_FLAGS", Self::FIND_NETWORK_DEFAULT_FLAGS),
        ("SZ_FIND_INTERESTING_ENTITIES_DEFAULT_FLAGS", Self::FIND_INTERESTING_ENTITIES_DEFAULT_FLAGS),
        ("SZ_WHY_ENTITIES_DEFAULT_FLAGS", Self::WHY_ENTITIES_DEFAULT_FLAGS),
        ("SZ_WHY_RECORDS_DEFAULT_FLAGS", Self::WHY_RECORDS_DEFAULT_FLAGS),
        ("SZ_WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS", Self::WHY_RECORD_IN_ENTITY_DEFAULT_FLAGS),
        ("SZ_WHY_SEARCH_DEFAULT_FLAGS", Self::WHY_SEARCH_DEFAULT_FLAGS),
        ("SZ_HOW_ENTITY_DEFAULT_FLAGS", Self::HOW_ENTITY_DEFAULT_FLAGS),
        ("SZ_VIRTUAL_ENTITY_DEFAULT_FLAGS", Self::VIRTUAL_ENTITY_DEFAULT_FLAGS),
        ("SZ_SEARCH_BY_ATTRIBUTES_ALL", Self::SEARCH_BY_ATTRIBUTES_ALL),
        ("SZ_SEARCH_BY_ATTRIBUTES_STRONG", Self::SEARCH_BY_ATTRIBUTES_STRONG),
        ("SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_ALL", Self::SEARCH_BY_ATTRIBUTES_MINIMAL_ALL),
        ("SZ_SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG", Self::SEARCH_BY_ATTRIBUTES_MINIMAL_STRONG),
        ("SZ_SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS", Self::SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS),
        ("SZ_ADD_RECORD_DEFAULT_FLAGS", Self::ADD_RECORD_DEFAULT_FLAGS),
        ("SZ_DELETE_RECORD_DEFAULT_FLAGS", Self::DELETE_RECORD_DEFAULT_FLAGS),
        ("SZ_REEVALUATE_ENTITY_DEFAULT_FLAGS", Self::REEVALUATE_ENTITY_DEFAULT_FLAGS),
        ("SZ_REEVALUATE_RECORD_DEFAULT_FLAGS", Self::REEVALUATE_RECORD_DEFAULT_FLAGS),
        ("SZ_PREPROCESS_RECORD_DEFAULT_FLAGS", Self::PREPROCESS_RECORD_DEFAULT_FLAGS),
        ("SZ_REDO_DEFAULT_FLAGS", Self::REDO_DEFAULT_FLAGS),
    ];

    pub const fn from_bits(bits: u64) -> Self {
        SzFlags(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn union(self, other: SzFlags) -> Self {
        SzFlags(self.0 | other.0)
    }

    pub const fn contains(self, other: SzFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Looks up a flag or preset by its symbolic name, e.g. `SZ_ENTITY_DEFAULT_FLAGS`.
    ///
    /// The `SZ_` prefix is optional and the lookup ignores ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::NAMED.iter().find_map(|(known, flags)| {
            let matches = known.eq_ignore_ascii_case(name)
                || known
                    .strip_prefix("SZ_")
                    .is_some_and(|short| short.eq_ignore_ascii_case(name));
            matches.then_some(*flags)
        })
    }

    /// ORs together the flags named in `names`.
    ///
    /// Unknown names are rejected as a usage error.
    pub fn from_names<I>(names: I) -> Result<Self, SzError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names.into_iter().try_fold(SzFlags::NO_FLAGS, |acc, name| {
            let name = name.as_ref();
            SzFlags::from_name(name)
                .map(|flags| acc | flags)
                .ok_or_else(|| {
                    SzError::usage("flags", "names", format!("unknown flag name '{name}'"))
                })
        })
    }

    /// Value carried by the `int64 flags` wire fields.
    pub(crate) const fn to_wire(self) -> i64 {
        self.0 as i64
    }
}

impl BitOr for SzFlags {
    type Output = SzFlags;

    fn bitor(self, rhs: SzFlags) -> SzFlags {
        self.union(rhs)
    }
}

impl BitOrAssign for SzFlags {
    fn bitor_assign(&mut self, rhs: SzFlags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SzFlags {
    type Output = SzFlags;

    fn bitand(self, rhs: SzFlags) -> SzFlags {
        SzFlags(self.0 & rhs.0)
    }
}

impl From<u64> for SzFlags {
    fn from(bits: u64) -> Self {
        SzFlags(bits)
    }
}

impl fmt::Display for SzFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
