//! Typed [`KeyAgreement`](ecka_api::KeyAgreement) schemes over a catalog curve
//!
//! Every scheme is the same thin shell around an [`EcdhEngine`](super::EcdhEngine):
//! fixed-size secret types that zeroize on drop, a public key that only
//! checks its length on decode, and validation deferred to the engine.

macro_rules! ecdh_agreement {
    (
        $(#[$meta:meta])*
        scheme: $scheme:ident,
        public_key: $pk:ident,
        secret_key: $sk:ident,
        shared_secret: $ss:ident,
        variant: $variant:expr,
        curve: $curve:literal,
        name: $name:literal,
        public_lens: [$($pk_len:expr),+ $(,)?],
        secret_len: $sk_len:expr,
        shared_len: $ss_len:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $scheme;

        #[doc = concat!("Public key for ", $name, ", in its wire encoding")]
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $pk(::alloc::vec::Vec<u8>);

        #[doc = concat!("Secret key for ", $name)]
        #[derive(Clone, Debug, ::zeroize::Zeroize, ::zeroize::ZeroizeOnDrop)]
        pub struct $sk(::ecka_common::security::SecretBuffer<{ $sk_len }>);

        #[doc = concat!("Shared secret from ", $name)]
        #[derive(Clone, Debug, PartialEq, Eq, ::zeroize::Zeroize, ::zeroize::ZeroizeOnDrop)]
        pub struct $ss(::ecka_common::security::SecretBuffer<{ $ss_len }>);

        impl $scheme {
            /// Engine bound to this scheme's catalog curve
            pub fn engine() -> ::ecka_api::Result<$crate::ecdh::EcdhEngine<'static>> {
                $crate::ecdh::EcdhEngine::for_variant($variant, $curve)
                    .map_err(::ecka_api::Error::from)
            }
        }

        impl $pk {
            /// The encoded public key
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl $ss {
            /// The raw shared secret; feed it through a KDF before use
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_slice()
            }
        }

        impl ::ecka_api::Serialize for $pk {
            fn from_bytes(bytes: &[u8]) -> ::ecka_api::Result<Self> {
                const LENS: &[usize] = &[$($pk_len),+];
                if !LENS.contains(&bytes.len()) {
                    return Err(::ecka_api::Error::InvalidLength {
                        context: concat!(stringify!($pk), "::from_bytes"),
                        expected: LENS[0],
                        actual: bytes.len(),
                    });
                }
                Ok(Self(bytes.to_vec()))
            }

            fn to_bytes(&self) -> ::alloc::vec::Vec<u8> {
                self.0.clone()
            }
        }

        impl ::ecka_api::SerializeSecret for $sk {
            fn from_bytes(bytes: &[u8]) -> ::ecka_api::Result<Self> {
                ::ecka_api::error::validate::length(
                    concat!(stringify!($sk), "::from_bytes"),
                    bytes.len(),
                    $sk_len,
                )?;
                $scheme::engine()?.validate_private(bytes).map_err(|e| {
                    ::ecka_api::Error::from(e)
                        .into_invalid_key()
                        .with_context(concat!(stringify!($sk), "::from_bytes"))
                })?;
                let mut raw = ::zeroize::Zeroizing::new([0u8; $sk_len]);
                raw.copy_from_slice(bytes);
                Ok(Self(::ecka_common::security::SecretBuffer::new(*raw)))
            }

            fn to_bytes_zeroizing(&self) -> ::zeroize::Zeroizing<::alloc::vec::Vec<u8>> {
                ::zeroize::Zeroizing::new(self.0.as_slice().to_vec())
            }
        }

        impl ::ecka_api::SerializeSecret for $ss {
            fn from_bytes(bytes: &[u8]) -> ::ecka_api::Result<Self> {
                ::ecka_api::error::validate::length(
                    concat!(stringify!($ss), "::from_bytes"),
                    bytes.len(),
                    $ss_len,
                )?;
                let mut raw = ::zeroize::Zeroizing::new([0u8; $ss_len]);
                raw.copy_from_slice(bytes);
                Ok(Self(::ecka_common::security::SecretBuffer::new(*raw)))
            }

            fn to_bytes_zeroizing(&self) -> ::zeroize::Zeroizing<::alloc::vec::Vec<u8>> {
                ::zeroize::Zeroizing::new(self.0.as_slice().to_vec())
            }
        }

        impl ::ecka_api::KeyAgreement for $scheme {
            type PublicKey = $pk;
            type SecretKey = $sk;
            type SharedSecret = $ss;

            fn name() -> &'static str {
                $name
            }

            fn keypair<R: ::rand::CryptoRng + ::rand::RngCore>(
                rng: &mut R,
            ) -> ::ecka_api::Result<(Self::PublicKey, Self::SecretKey)> {
                let private = Self::engine()?.generate_private(rng)?;
                let sk = <$sk as ::ecka_api::SerializeSecret>::from_bytes(&private)?;
                let pk = Self::derive_public(&sk)?;
                Ok((pk, sk))
            }

            fn derive_public(secret_key: &Self::SecretKey) -> ::ecka_api::Result<Self::PublicKey> {
                let public = Self::engine()?.derive_public(secret_key.0.as_slice())?;
                Ok($pk(public))
            }

            fn compute_shared(
                secret_key: &Self::SecretKey,
                peer_public: &Self::PublicKey,
            ) -> ::ecka_api::Result<Self::SharedSecret> {
                let secret =
                    Self::engine()?.compute_shared(secret_key.0.as_slice(), &peer_public.0)?;
                <$ss as ::ecka_api::SerializeSecret>::from_bytes(secret.as_slice())
            }
        }
    };
}
