/// Generates impls for shims wrapping a type as another.
///
/// This must be a newtype a la `struct Foo(Bar);`.
#[macro_export]
macro_rules! impl_opaque_thin_wrapper {
    ($target:ty => $inner:ty) => {
        impl $target {
            pub const fn new(v: $inner) -> Self {
                Self(v)
            }

            pub fn inner(&self) -> &$inner {
                &self.0
            }

            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $target {
            fn from(value: $inner) -> $target {
                <$target>::new(value)
            }
        }

        impl From<$target> for $inner {
            fn from(value: $target) -> $inner {
                value.into_inner()
            }
        }
    };
}

pub(crate) mod internal {
    /// Strips an optional `0x`/`0X` prefix and decodes exactly `N` bytes of hex.
    pub(crate) fn decode_fixed_hex<const N: usize>(s: &str) -> Result<[u8; N], String> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = ::hex::decode(digits).map_err(|e| e.to_string())?;
        <[u8; N]>::try_from(bytes.as_slice())
            .map_err(|_| format!("expected {} bytes, got {}", N, bytes.len()))
    }

    /// Generates the foundational API for a fixed-size byte buffer type.
    macro_rules! impl_buf_core {
        ($name:ident, $len:expr) => {
            impl $name {
                pub const LEN: usize = $len;

                pub const fn new(data: [u8; $len]) -> Self {
                    Self(data)
                }

                pub const fn zero() -> Self {
                    Self([0; $len])
                }

                pub const fn as_bytes(&self) -> &[u8; $len] {
                    &self.0
                }

                pub fn as_slice(&self) -> &[u8] {
                    &self.0
                }

                pub fn is_zero(&self) -> bool {
                    self.0.iter().all(|b| *b == 0)
                }
            }

            impl ::std::convert::AsRef<[u8]> for $name {
                fn as_ref(&self) -> &[u8] {
                    &self.0
                }
            }

            impl ::std::convert::From<[u8; $len]> for $name {
                fn from(data: [u8; $len]) -> Self {
                    Self(data)
                }
            }

            impl ::std::convert::From<$name> for [u8; $len] {
                fn from(buf: $name) -> Self {
                    buf.0
                }
            }

            impl<'a> ::std::convert::TryFrom<&'a [u8]> for $name {
                type Error = &'a [u8];

                fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
                    <[u8; $len]>::try_from(value).map(Self).map_err(|_| value)
                }
            }

            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self::zero()
                }
            }
        };
    }

    /// Generates `Debug` (full hex) and `Display` (truncated hex) formatting.
    macro_rules! impl_buf_fmt {
        ($name:ident, $len:expr) => {
            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&::hex::encode(self.0))
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(
                        f,
                        "{}..{}",
                        ::hex::encode(&self.0[..3]),
                        ::hex::encode(&self.0[$len - 3..])
                    )
                }
            }
        };
    }

    /// Generates `BorshSerialize` and `BorshDeserialize` impls writing the raw bytes.
    macro_rules! impl_buf_borsh {
        ($name:ident, $len:expr) => {
            impl ::borsh::BorshSerialize for $name {
                fn serialize<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                    writer.write_all(&self.0)
                }
            }

            impl ::borsh::BorshDeserialize for $name {
                fn deserialize_reader<R: ::std::io::Read>(
                    reader: &mut R,
                ) -> ::std::io::Result<Self> {
                    let mut array = [0u8; $len];
                    reader.read_exact(&mut array)?;
                    Ok(Self(array))
                }
            }
        };
    }

    /// Generates `Arbitrary` impl for property-based testing.
    macro_rules! impl_buf_arbitrary {
        ($name:ident, $len:expr) => {
            impl<'a> ::arbitrary::Arbitrary<'a> for $name {
                fn arbitrary(u: &mut ::arbitrary::Unstructured<'a>) -> ::arbitrary::Result<Self> {
                    let mut array = [0u8; $len];
                    u.fill_buffer(&mut array)?;
                    Ok(Self(array))
                }
            }
        };
    }

    /// Generates serde impls using a hex string, with an optional `0x` prefix accepted on input.
    macro_rules! impl_buf_serde {
        ($name:ident, $len:expr) => {
            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    serializer.serialize_str(&::hex::encode(self.0))
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    $crate::macros::internal::decode_fixed_hex::<$len>(&s)
                        .map(Self)
                        .map_err(<D::Error as ::serde::de::Error>::custom)
                }
            }
        };
    }

    pub(crate) use impl_buf_arbitrary;
    pub(crate) use impl_buf_borsh;
    pub(crate) use impl_buf_core;
    pub(crate) use impl_buf_fmt;
    pub(crate) use impl_buf_serde;
}
