//! Target arithmetic
//!
//! Conversions between compact `nBits`, full 256-bit targets, floating
//! difficulty and expected hash attempts.

use primitive_types::U256;

use super::target::TargetError;

/// Mantissa sign bit of the compact encoding
const COMPACT_SIGN_BIT: u32 = 0x0080_0000;

/// The difficulty-1 target, `0xffff0000 * 2**192`
pub fn difficulty_one_target() -> U256 {
    U256::from(0xffff_0000u64) << 192
}

/// Decode a compact `nBits` value into a 256-bit target
pub fn compact_to_target(bits: u32) -> Result<U256, TargetError> {
    let exponent = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;

    if mantissa != 0 && bits & COMPACT_SIGN_BIT != 0 {
        return Err(TargetError::NegativeCompact(bits));
    }

    if exponent <= 3 {
        return Ok(U256::from(mantissa >> (8 * (3 - exponent))));
    }

    let overflow = mantissa != 0
        && (exponent > 34 || (mantissa > 0xff && exponent > 33) || (mantissa > 0xffff && exponent > 32));
    if overflow {
        return Err(TargetError::CompactOverflow(bits));
    }

    Ok(U256::from(mantissa) << (8 * (exponent - 3)))
}

/// Encode a target into compact `nBits`, dropping low-order precision
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mantissa = if size <= 3 {
        target.low_u64() << (8 * (3 - size))
    } else {
        (target >> (8 * (size - 3))).low_u64()
    };
    let mut compact = mantissa as u32;

    // Keep the mantissa positive
    if compact & COMPACT_SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | ((size as u32) << 24)
}

pub fn u256_to_f64(value: U256) -> f64 {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    let mut acc = 0f64;
    for byte in bytes {
        acc = acc * 256.0 + byte as f64;
    }
    acc
}

/// Truncating conversion; negative and NaN map to zero, too-large to `U256::MAX`
pub fn f64_to_u256(value: f64) -> U256 {
    if value.is_nan() || value < 1.0 {
        return U256::zero();
    }
    if value >= 2f64.powi(256) {
        return U256::MAX;
    }
    if value < 2f64.powi(64) {
        return U256::from(value as u64);
    }
    // value = mantissa * 2**shift with a 53-bit mantissa, exact in f64
    let shift = value.log2().floor() as i32 - 52;
    let mantissa = (value / 2f64.powi(shift)) as u64;
    U256::from(mantissa) << shift as usize
}

/// Difficulty relative to the difficulty-1 target
pub fn target_to_difficulty(target: U256) -> f64 {
    let denominator = u256_to_f64(target.saturating_add(U256::one()));
    u256_to_f64(difficulty_one_target()) / denominator
}

/// Inverse of `target_to_difficulty`; non-positive difficulty is the maximum target
pub fn difficulty_to_target(difficulty: f64) -> U256 {
    if difficulty.is_nan() || difficulty <= 0.0 {
        return U256::MAX;
    }
    let target = u256_to_f64(difficulty_one_target()) / difficulty - 1.0;
    f64_to_u256(target)
}

/// Expected number of hashes to find one at or below `target`: `2**256 // (target + 1)`
pub fn average_attempts(target: U256) -> U256 {
    if target == U256::MAX {
        return U256::one();
    }
    let divisor = target + U256::one();
    // 2**256 = U256::MAX + 1
    let quotient = U256::MAX / divisor;
    let remainder = U256::MAX % divisor;
    if remainder + U256::one() == divisor {
        quotient + U256::one()
    } else {
        quotient
    }
}

/// `2**256 // 2**shift // divisor - 1`, the shape every sane-range bound takes
pub fn target_bound(shift: u32, divisor: u64) -> U256 {
    debug_assert!(shift < 256 && divisor > 0);
    let quotient = if shift == 0 {
        if divisor.is_power_of_two() {
            return U256::MAX >> divisor.trailing_zeros() as usize;
        }
        // 2**256 is not a multiple of divisor, so flooring MAX gives the same quotient
        U256::MAX / U256::from(divisor)
    } else {
        (U256::one() << (256 - shift) as usize) / U256::from(divisor)
    };
    quotient.saturating_sub(U256::one())
}
