use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }
}

/// Category name, base price, and the share of ratings landing above 3.
const CATEGORIES: [(&str, f64, f64); 8] = [
    ("electronics", 120.0, 0.70),
    ("fashion", 35.0, 0.55),
    ("home_living", 60.0, 0.60),
    ("books", 15.0, 0.80),
    ("toys", 25.0, 0.65),
    ("sports", 45.0, 0.50),
    ("beauty", 20.0, 0.45),
    ("groceries", 10.0, 0.35),
];

const CITIES: [&str; 5] = ["Jakarta", "Bandung", "Surabaya", "Medan", "Semarang"];

fn rating_for(rng: &mut SimpleRng, high_share: f64) -> u8 {
    let roll = rng.next_f64();
    if roll < high_share {
        // 4 or 5
        4 + (rng.next_u64() % 2) as u8
    } else if roll < high_share + 0.15 {
        3
    } else {
        // 1 or 2
        1 + (rng.next_u64() % 2) as u8
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let first_day = NaiveDate::from_ymd_opt(2023, 1, 1).context("bad start date")?;
    let span_days = 180;
    let orders_per_day = 12;

    let output_path = "data_ecommerce.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "order_id",
        "order_date",
        "category",
        "price",
        "rating",
        "review_date",
        "city",
    ])?;

    let mut order_no: u64 = 0;
    let mut rows: u64 = 0;

    for day_offset in 0..span_days {
        let day = first_day + Duration::days(day_offset);
        for _ in 0..orders_per_day {
            order_no += 1;
            let order_id = format!("ORD-{order_no:06}");
            let order_time = day
                .and_hms_opt(rng.range(6, 22) as u32, rng.range(0, 59) as u32, 0)
                .context("bad order time")?;
            let city = *rng.pick(&CITIES);

            // one order can span several line items
            let line_items = rng.range(1, 3);
            for _ in 0..line_items {
                let (category, base_price, high_share) = *rng.pick(&CATEGORIES);
                let price = base_price * (0.5 + rng.next_f64() * 1.5);
                let review_date = order_time + Duration::days(rng.range(1, 14) as i64);

                // a small share of rows carry no price or rating
                let price_cell = if rng.next_f64() < 0.02 {
                    String::new()
                } else {
                    format!("{price:.2}")
                };
                let rating_cell = if rng.next_f64() < 0.05 {
                    String::new()
                } else {
                    rating_for(&mut rng, high_share).to_string()
                };

                let order_date_cell = order_time.format("%Y-%m-%d %H:%M:%S").to_string();
                let review_date_cell = review_date.format("%Y-%m-%d %H:%M:%S").to_string();
                writer.write_record([
                    order_id.as_str(),
                    order_date_cell.as_str(),
                    category,
                    price_cell.as_str(),
                    rating_cell.as_str(),
                    review_date_cell.as_str(),
                    city,
                ])?;
                rows += 1;
            }
        }
    }

    writer.flush()?;
    println!("Wrote {rows} line items across {order_no} orders to {output_path}");
    Ok(())
}
