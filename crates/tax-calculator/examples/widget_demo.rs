//! Calculator Widget Demo
//!
//! Drives the widget through the mock DOM by clicking keypad buttons, then
//! runs the unified scenarios against it.
//!
//! Run with: RUST_LOG=tax_calculator=debug cargo run --example widget_demo

use tax_calculator::core::{CalculatorConfig, Command};
use tax_calculator::driver::{run_all_scenarios, CalculatorDriver};
use tax_calculator::wasm::WasmDriver;
use tracing_subscriber::EnvFilter;

fn show(driver: &WasmDriver) {
    println!(
        "   previous: {:<20} current: {}",
        format!("{:?}", driver.previous_display()),
        driver.current_display()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Tax Calculator Widget Demo - Mock DOM               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut driver = WasmDriver::new();

    println!("1️⃣  Chaining: 3 + 4 × 2 =");
    for id in ["btn-3", "btn-add", "btn-4", "btn-multiply"] {
        driver.click(id);
    }
    show(&driver);
    for id in ["btn-2", "btn-calculate"] {
        driver.click(id);
    }
    show(&driver);

    println!("\n2️⃣  Tax: 1234567 税込 then 税抜");
    driver.press(Command::Clear);
    driver.type_number("1234567");
    driver.press(Command::TaxInclude);
    show(&driver);
    driver.press(Command::TaxExclude);
    show(&driver);

    println!("\n3️⃣  Division by zero: 5 ÷ 0 =");
    driver.press(Command::Clear);
    for id in ["btn-5", "btn-divide", "btn-0", "btn-calculate"] {
        driver.click(id);
    }
    show(&driver);
    for alert in driver.alerts() {
        println!("   alert: {alert}");
    }

    println!("\n4️⃣  DOM Event History:");
    for (i, event) in driver.dom().event_history().iter().enumerate() {
        println!("   [{i}] {event:?}");
    }

    println!("\n5️⃣  Custom rate (8%): 100 税込");
    let mut reduced = WasmDriver::with_config(CalculatorConfig {
        tax_rate: 0.08,
        ..CalculatorConfig::default()
    });
    reduced.type_number("100");
    reduced.press(Command::TaxInclude);
    show(&reduced);

    println!("\n6️⃣  Unified scenarios:");
    run_all_scenarios(&mut WasmDriver::new());
    println!("   ✅ all scenarios passed");
}
