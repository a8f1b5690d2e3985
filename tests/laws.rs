use big_integer::{BigIntError, BigInteger};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_b16_1e7)
}

/// Random decimal literal with up to ~80 digits and a random sign.
fn random_literal(rng: &mut StdRng) -> String {
    let mut s = String::new();
    if rng.gen_bool(0.5) {
        s.push('-');
    }
    s.push(char::from(b'1' + rng.gen_range(0..9)));
    for _ in 0..rng.gen_range(0..80) {
        s.push(char::from(b'0' + rng.gen_range(0..10)));
    }
    s
}

/// Random value assembled from whole words, favouring 0 and u32::MAX words
/// so carries, borrows and quotient corrections get exercised.
fn random_words(rng: &mut StdRng) -> BigInteger {
    let mut value = BigInteger::from(0);
    for _ in 0..rng.gen_range(1..=6) {
        let word: u32 = match rng.gen_range(0..4) {
            0 => 0,
            1 => u32::MAX,
            2 => 1 << 31,
            _ => rng.gen(),
        };
        value = (value << 32) | BigInteger::from(word);
    }
    if rng.gen_bool(0.5) {
        -value
    } else {
        value
    }
}

#[test]
fn concrete_scenarios() {
    assert_eq!(
        (big("123456789012345678901234567890") + big("1")).to_string(),
        "123456789012345678901234567891"
    );
    assert_eq!(
        (big("1000000000000000000") * big("1000000000000000000")).to_string(),
        "1000000000000000000000000000000000000"
    );
    assert_eq!((big("-7") / big("2")).to_string(), "-3");
    assert_eq!((big("-7") % big("2")).to_string(), "-1");
    assert_eq!((big("255") & big("15")).to_string(), "15");
    assert_eq!((big("255") ^ big("255")).to_string(), "0");
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(BigInteger::default().to_string(), "0");
    assert_eq!(big("-0").to_decimal_string(), "0");
}

#[test]
fn round_trip() {
    let mut rng = rng();
    for _ in 0..500 {
        let s = random_literal(&mut rng);
        assert_eq!(big(&s).to_string(), s);

        let padded = match s.strip_prefix('-') {
            Some(digits) => format!("-000{}", digits),
            None => format!("000{}", s),
        };
        assert_eq!(big(&padded).to_string(), s);
    }
}

#[test]
fn matches_i128() {
    let mut rng = rng();
    for _ in 0..2000 {
        let x: i64 = match rng.gen_range(0..3) {
            0 => rng.gen_range(-20..20),
            1 => rng.gen::<i32>() as i64,
            _ => rng.gen(),
        };
        let y: i64 = match rng.gen_range(0..3) {
            0 => rng.gen_range(-20..20),
            1 => rng.gen::<i32>() as i64,
            _ => rng.gen(),
        };
        let (a, b) = (BigInteger::from(x), BigInteger::from(y));
        let (x, y) = (x as i128, y as i128);

        assert_eq!((&a + &b).to_i128(), Some(x + y), "{} + {}", x, y);
        assert_eq!((&a - &b).to_i128(), Some(x - y), "{} - {}", x, y);
        assert_eq!((&a * &b).to_i128(), Some(x * y), "{} * {}", x, y);
        if y != 0 {
            assert_eq!((&a / &b).to_i128(), Some(x / y), "{} / {}", x, y);
            assert_eq!((&a % &b).to_i128(), Some(x % y), "{} % {}", x, y);
        }
        assert_eq!((&a & &b).to_i128(), Some(x & y), "{} & {}", x, y);
        assert_eq!((&a | &b).to_i128(), Some(x | y), "{} | {}", x, y);
        assert_eq!((&a ^ &b).to_i128(), Some(x ^ y), "{} ^ {}", x, y);
        assert_eq!((!&a).to_i128(), Some(!x), "!{}", x);
        assert_eq!(a.cmp(&b), x.cmp(&y), "{} cmp {}", x, y);

        let k = rng.gen_range(0..64_u32);
        assert_eq!((&a << k as i32).to_i128(), Some(x << k), "{} << {}", x, k);
        assert_eq!((&a >> k as i32).to_i128(), Some(x >> k), "{} >> {}", x, k);
    }
}

#[test]
fn additive_and_multiplicative_laws() {
    let mut rng = rng();
    let zero = BigInteger::from(0);
    let one = BigInteger::from(1);
    for _ in 0..300 {
        let a = random_words(&mut rng);
        let b = random_words(&mut rng);
        assert_eq!(&a + &zero, a);
        assert_eq!(&a + &(-&a), zero);
        assert_eq!(&a - &a, zero);
        assert_eq!(&a * &one, a);
        assert_eq!(&a * &zero, zero);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&a * &b, &b * &a);
    }
}

#[test]
fn division_law() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = random_words(&mut rng);
        let b = random_words(&mut rng);
        if b.is_zero() {
            assert_eq!(a.div_rem(&b), Err(BigIntError::DivisionByZero));
            continue;
        }
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&(&q * &b) + &r, a, "{} / {}", a, b);
        assert!(r.abs() < b.abs(), "{} % {} = {}", a, b, r);
        assert!(r.is_zero() || r.is_negative() == a.is_negative(), "{} % {} = {}", a, b, r);
        assert_eq!(&a / &b, q);
        assert_eq!(&a % &b, r);
    }
}

#[test]
fn twos_complement_laws() {
    let mut rng = rng();
    let zero = BigInteger::from(0);
    for _ in 0..300 {
        let a = random_words(&mut rng);
        let b = random_words(&mut rng);
        assert_eq!(!&a, -(&a + 1));
        assert_eq!(&a & &zero, zero);
        assert_eq!(&a | &zero, a);
        assert_eq!(&a ^ &a, zero);
        assert_eq!(&(&a ^ &b) ^ &b, a);
        assert_eq!(!(&a & &b), !&a | !&b);
        assert_eq!(&(&a | &b) - &(&a & &b), &a ^ &b);
    }
}

#[test]
fn shift_laws() {
    let mut rng = rng();
    for _ in 0..300 {
        let a = random_words(&mut rng);
        let k = rng.gen_range(0..200_i32);
        if !a.is_negative() {
            assert_eq!((&a << k) >> k, a);
        }
        // floor division by a power of two
        let power = BigInteger::from(1) << k;
        let (q, r) = a.div_rem(&power).unwrap();
        let floor = if r.is_negative() { q - 1 } else { q };
        assert_eq!(&a >> k, floor, "{} >> {}", a, k);
        assert_eq!(&a << k, &a * &power);
    }
    assert_eq!(big("-1") >> 1, big("-1"));
}

#[test]
fn copies_are_independent() {
    let a = big("-123456789012345678901234567890123456789");
    let mut b = a.clone();
    assert!(a.magnitude().is_shared());
    b.increment();
    b <<= 3;
    assert_eq!(a.to_string(), "-123456789012345678901234567890123456789");
    assert_eq!(b.to_string(), "-987654312098765431209876543120987654304");
}

#[test]
fn unsuffixed_literal_operands() {
    let a = big("-12345678901234567890");
    assert_eq!((&a + 1).to_string(), "-12345678901234567889");
    assert_eq!((&a * 2 % 7).to_string(), "-2");
    assert_eq!((&a / 10).abs().to_string(), "1234567890123456789");
    assert_eq!(&a << 3 >> 3, a);
    assert_eq!((&a >> -3).to_string(), (&a << 3).to_string());

    let mut b = a.clone();
    b += 1;
    b <<= 1;
    b >>= 1;
    assert_eq!(b.to_string(), "-12345678901234567889");
}
