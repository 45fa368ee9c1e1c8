use core::fmt;

use bitflags::bitflags;

/// Which Japanese character standard a codepoint belongs to.
///
/// Every codepoint is assigned exactly one category, the *most specific*
/// standard that defines it. The declaration order is meaningful: later
/// variants denote progressively larger repertoires, so `Ord` on this enum
/// ranks codepoints by how widely supported they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    /// Not present in any of the tracked standards.
    Unknown = 0,
    /// C0/C1 control characters.
    ControlChar = 1,
    /// Printable US-ASCII, U+0020 through U+007E.
    UsAscii = 2,
    /// JIS X 0201: halfwidth katakana, plus the yen sign and overline.
    JisX0201 = 3,
    /// JIS X 0208 (the 1990 double-byte repertoire).
    JisX0208 = 4,
    /// NEC special characters (Windows-932 row 13).
    NecSpecialChar = 5,
    /// IBM extension characters (Windows-932 leads 0xFA through 0xFC).
    IbmExt = 6,
    /// JIS X 0213 plane 1 additions beyond JIS X 0208.
    JisX0213Plane3 = 7,
    /// JIS X 0213 plane 2.
    JisX0213Plane4 = 8,
}

impl Category {
    /// All categories in declaration (ordinal) order.
    pub const ALL: [Category; 9] = [
        Category::Unknown,
        Category::ControlChar,
        Category::UsAscii,
        Category::JisX0201,
        Category::JisX0208,
        Category::NecSpecialChar,
        Category::IbmExt,
        Category::JisX0213Plane3,
        Category::JisX0213Plane4,
    ];

    /// The numeric tag used in the bundled classification resource.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a category by its resource tag.
    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<Category> {
        match ordinal {
            0 => Some(Category::Unknown),
            1 => Some(Category::ControlChar),
            2 => Some(Category::UsAscii),
            3 => Some(Category::JisX0201),
            4 => Some(Category::JisX0208),
            5 => Some(Category::NecSpecialChar),
            6 => Some(Category::IbmExt),
            7 => Some(Category::JisX0213Plane3),
            8 => Some(Category::JisX0213Plane4),
            _ => None,
        }
    }

    /// The corresponding single-member [`CategorySet`].
    #[inline]
    pub const fn as_set(self) -> CategorySet {
        CategorySet::from_bits_truncate(1 << self as u8)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Unknown => "unknown",
            Category::ControlChar => "control",
            Category::UsAscii => "us-ascii",
            Category::JisX0201 => "jis-x-0201",
            Category::JisX0208 => "jis-x-0208",
            Category::NecSpecialChar => "nec-special",
            Category::IbmExt => "ibm-ext",
            Category::JisX0213Plane3 => "jis-x-0213-plane-3",
            Category::JisX0213Plane4 => "jis-x-0213-plane-4",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// A set of [`Category`] values, used to ask "is this codepoint in any
    /// of these standards" in a single lookup.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CategorySet: u16 {
        const UNKNOWN = 1 << 0;
        const CONTROL_CHAR = 1 << 1;
        const US_ASCII = 1 << 2;
        const JIS_X_0201 = 1 << 3;
        const JIS_X_0208 = 1 << 4;
        const NEC_SPECIAL_CHAR = 1 << 5;
        const IBM_EXT = 1 << 6;
        const JIS_X_0213_PLANE_3 = 1 << 7;
        const JIS_X_0213_PLANE_4 = 1 << 8;
    }
}

impl CategorySet {
    /// Whether `category` is a member of this set.
    #[inline]
    pub const fn has(self, category: Category) -> bool {
        self.bits() & (1 << category as u8) != 0
    }
}

impl From<Category> for CategorySet {
    #[inline]
    fn from(category: Category) -> Self {
        category.as_set()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CategorySet::empty(), |set, c| set | c.as_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable() {
        // The resource file encodes categories by these numbers.
        let expected: [(Category, u8); 9] = [
            (Category::Unknown, 0),
            (Category::ControlChar, 1),
            (Category::UsAscii, 2),
            (Category::JisX0201, 3),
            (Category::JisX0208, 4),
            (Category::NecSpecialChar, 5),
            (Category::IbmExt, 6),
            (Category::JisX0213Plane3, 7),
            (Category::JisX0213Plane4, 8),
        ];
        for (cat, ord) in expected {
            assert_eq!(cat.ordinal(), ord);
            assert_eq!(Category::from_ordinal(ord), Some(cat));
        }
        assert_eq!(Category::from_ordinal(9), None);
    }

    #[test]
    fn ordering_follows_repertoire_size() {
        assert!(Category::UsAscii < Category::JisX0201);
        assert!(Category::JisX0208 < Category::NecSpecialChar);
        assert!(Category::JisX0213Plane3 < Category::JisX0213Plane4);
    }

    #[test]
    fn set_membership() {
        let set: CategorySet = [Category::UsAscii, Category::JisX0208]
            .into_iter()
            .collect();
        assert!(set.has(Category::UsAscii));
        assert!(set.has(Category::JisX0208));
        assert!(!set.has(Category::IbmExt));
        assert_eq!(CategorySet::from(Category::IbmExt), CategorySet::IBM_EXT);
    }
}
