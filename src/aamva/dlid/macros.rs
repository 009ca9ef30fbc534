/// Declares the element vocabulary of one standard revision.
///
/// Each variant has a canonical 3-byte tag, optionally followed by `|`
/// separated alias tags that issuers still emit from older systems. Aliases
/// decode to the same variant.
macro_rules! data_elements_enum {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident : $tag:literal $(| $alias:literal)*),* }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub fn from_id(id: &[u8; 3]) -> Option<Self> {
				match id {
					$($tag $(| $alias)* => Some(Self::$id),)*
					_ => None
				}
			}
		}
	};
}

pub(crate) use data_elements_enum;
