use alloy_primitives::{Address, B256, address, keccak256};

/// Largest address in the low half of the 160-bit space, `2^159 - 1`.
const HALF_ADDRESS_SPACE: Address = address!("0x7fffffffffffffffffffffffffffffffffffffff");

/// Computes the CREATE2 address `keccak256(0xff ++ deployer ++ salt ++ init_code_hash)[12..]`.
#[inline]
pub fn compute_address(deployer: Address, salt: B256, init_code_hash: B256) -> Address {
    deployer.create2(salt, init_code_hash)
}

/// Hashes creation bytecode followed by its ABI-encoded constructor arguments.
pub fn init_code_hash(bytecode: &[u8], constructor_args: &[u8]) -> B256 {
    keccak256([bytecode, constructor_args].concat())
}

/// Which side of the pool the new token lands on relative to the numeraire.
///
/// Pool currencies are sorted by address, so a token must sort below the
/// numeraire to become `currency0` and above it to become `currency1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingSide {
    /// The token must sort below the numeraire.
    Token0,
    /// The token must sort above the numeraire.
    Token1,
}

impl OrderingSide {
    /// Derives the side the token must take for a given numeraire.
    ///
    /// The zero address (native ether) and any numeraire in the low half of the
    /// address space put the token above the numeraire; a numeraire in the high
    /// half puts the token below it.
    pub fn for_numeraire(numeraire: Address) -> Self {
        if numeraire == Address::ZERO {
            Self::Token1
        } else if numeraire > HALF_ADDRESS_SPACE {
            Self::Token0
        } else {
            Self::Token1
        }
    }

    #[inline]
    pub fn is_token0(self) -> bool {
        matches!(self, Self::Token0)
    }

    /// Whether `token` sorts on this side of `numeraire`.
    #[inline]
    pub fn accepts(self, token: Address, numeraire: Address) -> bool {
        match self {
            Self::Token0 => token < numeraire,
            Self::Token1 => token > numeraire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    #[test]
    fn create2_reference_vectors() {
        let init_code_hash = keccak256([0x00u8]);
        assert_eq!(
            compute_address(Address::ZERO, B256::ZERO, init_code_hash),
            address!("0x4D1A2e2bB4F88F0250f26Ffff098B0b30B26BF38")
        );
        assert_eq!(
            compute_address(
                address!("0xdeadbeef00000000000000000000000000000000"),
                B256::ZERO,
                init_code_hash
            ),
            address!("0xB928f69Bb1D91Cd65274e3c79d8986362984fDA3")
        );
        assert_eq!(
            compute_address(
                address!("0xdeadbeef00000000000000000000000000000000"),
                b256!("0x000000000000000000000000feed000000000000000000000000000000000000"),
                init_code_hash
            ),
            address!("0xD04116cDd17beBE565EB2422F2497E06cC1C9833")
        );
    }

    #[test]
    fn compute_address_is_deterministic() {
        let deployer = address!("0x9fC3dc011b461664c835F2527fffb1169b3C213e");
        let salt = B256::repeat_byte(0x42);
        let hash = keccak256(b"bytecode");
        assert_eq!(
            compute_address(deployer, salt, hash),
            compute_address(deployer, salt, hash)
        );
    }

    #[test]
    fn init_code_hash_appends_arguments() {
        assert_eq!(init_code_hash(&[0x60, 0x00], &[0x01]), keccak256([0x60u8, 0x00, 0x01]));
        assert_eq!(init_code_hash(&[0x00], &[]), keccak256([0x00u8]));
    }

    #[test]
    fn ordering_side_three_regimes() {
        assert_eq!(OrderingSide::for_numeraire(Address::ZERO), OrderingSide::Token1);
        assert_eq!(
            OrderingSide::for_numeraire(address!("0xffffffffffffffffffffffffffffffffffffffff")),
            OrderingSide::Token0
        );
        assert_eq!(
            OrderingSide::for_numeraire(address!("0x1111111111111111111111111111111111111111")),
            OrderingSide::Token1
        );
    }

    #[test]
    fn ordering_side_threshold_edges() {
        assert_eq!(OrderingSide::for_numeraire(HALF_ADDRESS_SPACE), OrderingSide::Token1);
        assert_eq!(
            OrderingSide::for_numeraire(address!("0x8000000000000000000000000000000000000000")),
            OrderingSide::Token0
        );
    }

    #[test]
    fn ordering_side_accepts() {
        let numeraire = address!("0x1111111111111111111111111111111111111111");
        let above = address!("0x2000000000000000000000000000000000000000");
        let below = address!("0x0100000000000000000000000000000000000000");
        assert!(OrderingSide::Token1.accepts(above, numeraire));
        assert!(!OrderingSide::Token1.accepts(below, numeraire));
        assert!(OrderingSide::Token0.accepts(below, numeraire));
        assert!(!OrderingSide::Token0.accepts(numeraire, numeraire));
        assert!(!OrderingSide::Token1.accepts(numeraire, numeraire));
    }
}
