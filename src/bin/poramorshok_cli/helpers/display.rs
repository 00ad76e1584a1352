// ABOUTME: Output formatting helpers for poramorshok-cli
// ABOUTME: Prints tracker views, advice, chat transcripts and generated plans to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use poramorshok::{
    controllers::{AdviceOutcome, EntryAdded, TrackerView},
    intelligence::feet_inches_from_cm,
    language::Language,
    models::{ChatMessage, DietPlan, ExercisePlan, HealthAdvice, Sender, SymptomAnalysis},
};

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  • {item}");
    }
}

/// Display the tracker screen
pub fn display_tracker(view: &TrackerView) {
    println!("\nHealth Tracker ({})", view.language);
    println!("{}", "=".repeat(50));
    println!(
        "   Age:     {}",
        view.age.as_deref().unwrap_or("not set")
    );
    println!("   Entries: {}", view.summary.entries);

    let Some(latest) = &view.latest else {
        println!("\nNo entries yet. Add one with `poramorshok-cli track add`.");
        return;
    };

    let feet_inches = feet_inches_from_cm(latest.height)
        .map(|height| format!(" / {height}"))
        .unwrap_or_default();
    println!(
        "   Latest:  {} | {:.1} kg | {:.1} cm{feet_inches} | BMI {:.2} ({})",
        latest.date,
        latest.weight,
        latest.height,
        latest.bmi,
        view.category_label.as_deref().unwrap_or_default()
    );
    if let Some(position) = view.summary.scale_position {
        println!("   Scale:   {position:.0}% of 15-40");
    }

    println!("\nHistory:");
    for point in &view.trends.points {
        println!(
            "   {}  weight {:>6.1}  bmi {:>5.2}",
            point.date, point.weight, point.bmi
        );
    }

    match &view.advice {
        Some(advice) => display_advice(advice),
        None => println!("\nNo cached advice for this language."),
    }
}

/// Display the result of adding an entry
pub fn display_entry_added(added: &EntryAdded, language: Language) {
    println!("\nEntry saved ({} total)", added.entries);
    println!(
        "   {} | BMI {:.2} ({})",
        added.entry.date,
        added.entry.bmi,
        added.category.label(language)
    );
    display_advice_outcome(&added.advice);
}

/// Display advice together with where it came from
pub fn display_advice_outcome(outcome: &AdviceOutcome) {
    match outcome {
        AdviceOutcome::Cached { advice } | AdviceOutcome::Fetched { advice } => {
            display_advice(advice);
        }
        AdviceOutcome::Failed { message } => println!("\n{message}"),
        AdviceOutcome::Superseded => println!("\nAdvice request was superseded."),
    }
}

/// Display health advice
pub fn display_advice(advice: &HealthAdvice) {
    print_list("Dietary advice", &advice.dietary_advice);
    print_list("Exercise recommendations", &advice.exercise_recommendations);
    print_list("Lifestyle suggestions", &advice.lifestyle_suggestions);
}

fn display_analysis(analysis: &SymptomAnalysis) {
    print_list("Symptoms", &analysis.symptoms);
    print_list("Possible causes", &analysis.causes);
    print_list("Treatments", &analysis.treatments);
    print_list("Medications", &analysis.medications);
}

/// Display one chat message
pub fn display_chat_message(message: &ChatMessage) {
    let author = match message.sender {
        Sender::User => "You",
        Sender::Ai => "AI",
    };
    println!("\n[{author}] {}", message.text);
    if let Some(analysis) = &message.analysis {
        display_analysis(analysis);
    }
}

/// Display a diet plan
pub fn display_diet_plan(plan: &DietPlan) {
    println!("\n{}", plan.summary);
    for day in &plan.plan {
        println!("\n{}", day.day);
        println!("{}", "-".repeat(40));
        println!("   {}", day.daily_note);
        for meal in &day.meals {
            println!("   {}: {}", meal.name, meal.items.join(", "));
        }
    }
}

/// Display an exercise plan
pub fn display_exercise_plan(plan: &ExercisePlan, language: Language) {
    println!("\n{}", plan.advice);
    for day in &plan.plan {
        println!("\n{}", day.day);
        println!("{}", "-".repeat(40));
        println!("   {}", day.details);
        for exercise in &day.exercises {
            println!(
                "   [{}] {} ({}) - {}",
                exercise.exercise_type.label(language),
                exercise.name,
                exercise.duration,
                exercise.description
            );
        }
    }
}
