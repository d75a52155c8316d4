use std::fs::read_to_string;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
	pub name: String,
	pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodiesProblem {
	pub num_employees: usize,
	pub products: Vec<Product>,
}

/// Reads a goodies price file: a `Number of employees: k` line plus one
/// `name: price` line per product, in any order. A `Goodies and Prices:`
/// banner line and anything without a colon are ignored.
pub fn parse_goodies(file_path: &str) -> GoodiesProblem {
	let raw_text = read_to_string(file_path).expect("Couldn't read goodies file");
	parse_goodies_text(&raw_text)
}

fn parse_goodies_text(raw_text: &str) -> GoodiesProblem {
	let mut num_employees = 0;
	let mut products = Vec::new();

	for line in raw_text.lines() {
		if let Some(value) = line.strip_prefix("Number of employees:") {
			num_employees = value.trim().parse::<usize>()
				.expect("Couldn't parse the number of employees");
		} else if !line.starts_with("Goodies and Prices:") {
			if let Some((name, price)) = line.split_once(':') {
				products.push(Product {
					name: name.trim().to_string(),
					price: price.trim().parse::<i64>().expect("Couldn't parse a product price"),
				});
			}
		}
	}

	GoodiesProblem { num_employees, products }
}

/// Picks the `num_products` products whose highest-to-lowest price spread is
/// smallest: sort ascending by price, then slide a window of that width and
/// keep the first window with the smallest spread.
pub fn find_min_price_range(products: &[Product], num_products: usize) -> Vec<Product> {
	assert!(num_products >= 1, "At least one product must be selected");
	assert!(
		num_products <= products.len(),
		"Cannot select {} products out of {}", num_products, products.len()
	);

	let mut sorted_products = products.to_vec();
	sorted_products.sort_by_key(|product| product.price);

	let mut best_first = 0;
	let mut best_spread = i64::MAX;
	for last in (num_products - 1)..sorted_products.len() {
		let first = last + 1 - num_products;
		let spread = sorted_products[last].price - sorted_products[first].price;
		if spread < best_spread {
			best_spread = spread;
			best_first = first;
		}
	}

	sorted_products[best_first..best_first + num_products].to_vec()
}

pub fn run(source_file: &str) {
	let problem = parse_goodies(source_file);

	println!("Number of employees: {}", problem.num_employees);
	println!("Goodies and Prices:");
	println!("{:<20}Price", "Name");
	for product in &problem.products {
		println!("{:<20}{}", product.name, product.price);
	}

	let selection = find_min_price_range(&problem.products, problem.num_employees);

	let mut report = String::from("The goodies selected for distribution are:\n");
	for product in &selection {
		report.push_str(&format!("{}: {}\n", product.name, product.price));
	}
	let spread = selection[selection.len() - 1].price - selection[0].price;
	report.push_str(&format!(
		"And the difference between the chosen goodie with highest price and the lowest price is {}\n",
		spread
	));

	println!("{}", "-".repeat(40));
	println!("{}", report);

	let output_file = output_path(source_file);
	std::fs::write(&output_file, report).expect("Couldn't write the output file");
	println!("Data successfully written to {}", output_file);
}

/// `./goodies.txt` becomes `goodies-output.txt`, next to where the program
/// runs, matching the naive stem extraction of the original tool.
fn output_path(source_file: &str) -> String {
	let trimmed = source_file.trim_start_matches("./");
	match trimmed.split_once('.') {
		Some((stem, _extension)) => format!("{}-output.txt", stem),
		None => format!("{}-output.txt", trimmed),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn product(name: &str, price: i64) -> Product {
		Product { name: name.to_string(), price }
	}

	#[test]
	fn test_parse_goodies_file() {
		let problem = parse_goodies("./test-problems/goodies.txt");
		assert_eq!(4, problem.num_employees);
		assert_eq!(vec![
			product("Fitbit Plus", 7980),
			product("IPods", 22349),
			product("MI Band", 999),
			product("Cult Fit Smart Watch", 4999),
			product("Digital Camera", 11101),
		], problem.products);
	}

	#[test]
	fn test_parse_goodies_text_ignores_banner_and_plain_lines() {
		let problem = parse_goodies_text(
			"Number of employees: 2\nGoodies and Prices:\nsome remark\nPen: 10\n"
		);
		assert_eq!(2, problem.num_employees);
		assert_eq!(vec![product("Pen", 10)], problem.products);
	}

	#[test]
	fn test_find_min_price_range_picks_tightest_window() {
		let products = vec![
			product("A", 100),
			product("B", 400),
			product("C", 120),
			product("D", 800),
			product("E", 110),
		];
		// Sorted prices: 100, 110, 120, 400, 800. Tightest window of 3 is
		// 100..120 with a spread of 20.
		let selection = find_min_price_range(&products, 3);
		assert_eq!(vec![product("A", 100), product("E", 110), product("C", 120)], selection);
	}

	#[test]
	fn test_find_min_price_range_with_single_product() {
		let products = vec![product("A", 100), product("B", 50)];
		assert_eq!(vec![product("B", 50)], find_min_price_range(&products, 1));
	}

	#[test]
	fn test_find_min_price_range_keeps_first_window_on_ties() {
		let products = vec![
			product("A", 10),
			product("B", 20),
			product("C", 30),
		];
		assert_eq!(
			vec![product("A", 10), product("B", 20)],
			find_min_price_range(&products, 2)
		);
	}

	#[test]
	#[should_panic(expected = "Cannot select")]
	fn test_find_min_price_range_rejects_too_small_lists() {
		find_min_price_range(&[product("A", 1)], 2);
	}

	#[test]
	fn test_output_path() {
		assert_eq!("goodies-output.txt", output_path("./goodies.txt"));
		assert_eq!("prices-output.txt", output_path("prices.txt"));
		assert_eq!("prices-output.txt", output_path("prices"));
	}
}
