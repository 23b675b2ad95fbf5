use customer_core_api::domain::NewCustomer;
use uuid::Uuid;

/// A customer whose contact details do not collide with any other test run
pub fn new_test_customer(name: &str) -> NewCustomer {
    let suffix = Uuid::new_v4().simple().to_string();
    let digits = Uuid::new_v4().as_u128() % 100_000_000;
    NewCustomer::new(
        name,
        format!("customer-{suffix}@example.com"),
        format!("+9181{digits:08}"),
    )
}

/// A well-formed PAN that is unique with overwhelming probability
pub fn random_pan() -> String {
    let bytes = Uuid::new_v4().into_bytes();
    let letter = |b: u8| char::from(b'A' + b % 26);
    let digit = |b: u8| char::from(b'0' + b % 10);

    let mut pan = String::with_capacity(10);
    pan.extend(bytes[..5].iter().map(|&b| letter(b)));
    pan.extend(bytes[5..9].iter().map(|&b| digit(b)));
    pan.push(letter(bytes[9]));
    pan
}

#[cfg(test)]
mod tests {
    use super::*;
    use customer_core_api::domain::normalize_pan;

    #[test]
    fn test_random_pan_is_well_formed() {
        for _ in 0..32 {
            let pan = random_pan();
            assert_eq!(normalize_pan(&pan), Ok(pan));
        }
    }

    #[test]
    fn test_new_test_customer_is_unique() {
        let a = new_test_customer("A");
        let b = new_test_customer("B");
        assert_ne!(a.email, b.email);
        assert_eq!(a.email, a.email.to_lowercase());
    }
}
