use serde_json::{Map, Value};

/// Render output as a markdown-flavoured document.
///
/// Knows the shape of the loan cost report and renders it as the classic
/// bank-offer writeup: general information, the real-rate breakdown for the
/// suggested payment, and the stress-test section. Any other value falls
/// back to a labelled figure list.
pub fn print_markdown(value: &Value) {
    let envelope = value.as_object();
    let result = envelope.and_then(|m| m.get("result")).unwrap_or(value);

    match result.as_object() {
        Some(map) if map.contains_key("general") && map.contains_key("suggested") => {
            print_report(map);
        }
        Some(map) => print_figures(map),
        None => println!("{}", result),
    }

    // Warnings go to stderr so the document itself stays clean.
    if let Some(Value::Array(warnings)) = envelope.and_then(|m| m.get("warnings")) {
        for warning in warnings {
            if let Value::String(s) = warning {
                eprintln!("warning: {}", s);
            }
        }
    }
}

fn print_report(map: &Map<String, Value>) {
    if let Some(Value::String(bank)) = map.get("bank_name") {
        println!("# {}", bank);
    }

    println!("# General loan information:\n");
    if let Some(Value::Object(general)) = map.get("general") {
        figure("Loan value", general.get("loan_value"));
        figure(
            "Suggested yearly interest rate",
            general.get("suggested_yearly_rate_percent"),
        );
        figure(
            "Suggested monthly payment",
            general.get("suggested_monthly_payment"),
        );
        figure("Extra monthly costs", general.get("extra_monthly_costs"));
        figure("Loan fixed costs", general.get("extra_fixed_loan_costs"));
        figure("Loan term in years", general.get("years"));
    }
    println!();

    println!("# Loan real interest rates and costs:\n");
    if let Some(Value::Object(breakdown)) = map.get("suggested") {
        print_breakdown(breakdown);
    }

    if let Some(Value::Array(stress)) = map.get("stress_test") {
        if !stress.is_empty() {
            println!("# Stress test:");
            for entry in stress {
                if let Some(Value::Object(breakdown)) = entry.get("breakdown") {
                    print_breakdown(breakdown);
                }
            }
        }
    }
}

fn print_breakdown(breakdown: &Map<String, Value>) {
    let rate = format_value(breakdown.get("nominal_rate_percent"));
    let suggested_by_bank = breakdown
        .get("suggested_by_bank")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if suggested_by_bank {
        println!("## Loan costs as suggested by the bank with the rate {} %\n", rate);
    } else {
        println!("## Loan costs with yearly rate {} %\n", rate);
    }

    let payment = format_value(breakdown.get("monthly_payment"));
    println!(
        "Monthly payment at the nominal loan interest rate of `{} %` =\n\n `{}`\n",
        rate, payment
    );
    println!(
        "Loan total value paid back =\n\n `{}`\n",
        format_value(breakdown.get("total_payment"))
    );
    println!(
        "Yearly rate with monthly payment of `{}` =\n\n `{} %`\n",
        payment,
        format_value(breakdown.get("estimated_rate_percent"))
    );

    let with_extras = format_value(breakdown.get("monthly_payment_with_extras"));
    println!("Total monthly payment with extra costs =\n\n `{}`\n", with_extras);
    println!(
        "Yearly rate with monthly payment + extra costs `{}` =\n\n `{} %`\n",
        with_extras,
        format_value(breakdown.get("estimated_rate_with_extras_percent"))
    );

    let full_payment = format_value(breakdown.get("full_monthly_payment"));
    println!(
        "Yearly rate with monthly payment + extra costs + fixed costs `{}` =\n\n `{} %`\n",
        full_payment,
        format_value(breakdown.get("estimated_full_rate_percent"))
    );
}

fn print_figures(map: &Map<String, Value>) {
    for (key, value) in map {
        println!("{} =\n\n `{}`\n", label(key), format_value(Some(value)));
    }
}

fn figure(label: &str, value: Option<&Value>) {
    println!("{} =\n\n `{}`\n", label, format_value(value));
}

fn label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => serde_json::to_string(other).unwrap_or_default(),
        None => String::new(),
    }
}
