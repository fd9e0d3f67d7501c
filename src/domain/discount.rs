use super::errors::DomainError;

/// Apply a whole-number percentage discount to `original_price`.
///
/// The reduction is `original_price * discount_percentage / 100` with integer
/// division (truncating toward zero), so a price of 99 at 50% becomes 50, not
/// 49. The price itself is not checked; zero and negative prices go through
/// the same arithmetic.
pub fn calculate_discount(original_price: i32, discount_percentage: i32) -> Result<i32, DomainError> {
    if !(0..=100).contains(&discount_percentage) {
        return Err(DomainError::InvalidArgument(
            "Discount percentage must be between 0 and 100.".to_string(),
        ));
    }

    let price = i64::from(original_price);
    let reduction = price * i64::from(discount_percentage) / 100;
    // |reduction| <= |price|, and both share a sign, so the result stays within i32.
    Ok((price - reduction) as i32)
}
