//! fitplan - Personalized diet and training plans that adapt to recorded progress

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use fitplan::db::{Database, PlanRepository, ProgressEntry};
use fitplan::exercises::{find_exercise_by_name, get_all_exercises};
use fitplan::ml::{Analytics, PlanAdjuster, WeightForecaster, analyze_at};
use fitplan::plan::GeneratedPlan;
use fitplan::planner::PlanGenerator;
use fitplan::profile::{ActivityLevel, Goal, Sex, UserProfile};
use fitplan::tips::{format_tip, tips_for_goal, universal_tips};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(author, version, about = "Personalized diet and training plans that adapt to your progress")]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "FITPLAN_DB", default_value = "fitplan.db")]
    db: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save your profile
    Profile {
        #[arg(long, default_value = "me")]
        name: String,
        #[arg(long)]
        age: u32,
        /// Body weight in kg
        #[arg(long)]
        weight: f64,
        /// Height in cm
        #[arg(long)]
        height: f64,
        #[arg(long, value_enum)]
        sex: Sex,
        #[arg(long, value_enum)]
        activity: ActivityLevel,
        #[arg(long, value_enum)]
        goal: Goal,
        /// Food term to avoid (repeatable)
        #[arg(long = "restriction")]
        restrictions: Vec<String>,
        /// Preference such as "vegetarian-diet" (repeatable)
        #[arg(long = "preference")]
        preferences: Vec<String>,
    },

    /// Generate a new plan from the saved profile
    Generate,

    /// Show the active plan
    Show,

    /// Log today's progress and adjust the plan
    Log {
        /// Body weight in kg
        #[arg(long)]
        weight: f64,
        /// Calories eaten
        #[arg(long)]
        calories: u32,
        /// Training sessions done
        #[arg(long)]
        sessions: u32,
        /// Water drunk in liters
        #[arg(long)]
        water: f64,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Only record the entry
        #[arg(long)]
        no_adjust: bool,
    },

    /// Adjust the active plan from the progress history
    Adjust,

    /// Show progress statistics and forecast
    Stats,

    /// Remove the current plan
    Clear,

    /// Browse the exercise catalog
    Exercises {
        /// Exercise name for details
        name: Option<String>,
    },

    /// Tips for your goal
    Tips,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let db = Database::open(&cli.db)?;
    let now = Utc::now();

    match cli.command {
        Some(Commands::Profile {
            name,
            age,
            weight,
            height,
            sex,
            activity,
            goal,
            restrictions,
            preferences,
        }) => {
            let profile = UserProfile {
                id: format!("user-{}", name.to_lowercase().replace(' ', "-")),
                name,
                age,
                weight_kg: weight,
                height_cm: height,
                sex,
                activity,
                goal,
                restrictions,
                preferences,
            };
            db.save_profile(&profile)?;
            println!(
                "Saved profile: {} ({} y, {:.1} kg, {:.0} cm) - {}",
                profile.name,
                profile.age,
                profile.weight_kg,
                profile.height_cm,
                profile.goal.label()
            );
        }

        Some(Commands::Generate) => {
            let profile = require_profile(&db)?;
            let plan = PlanGenerator::with_thread_rng().generate_at(&profile, now);
            db.save(&plan)?;
            print_plan(&plan, now);
        }

        Some(Commands::Show) | None => match db.load_active(now)? {
            Some(plan) => print_plan(&plan, now),
            None => println!("No active plan. Run `fitplan generate` to create one."),
        },

        Some(Commands::Log {
            weight,
            calories,
            sessions,
            water,
            date,
            no_adjust,
        }) => {
            let entry = ProgressEntry {
                date: date.unwrap_or_else(|| now.date_naive()),
                weight_kg: weight,
                calories,
                exercise_sessions: sessions,
                water_liters: water,
            };
            db.add_progress(&entry)?;
            println!(
                "Logged: {} | {:.1} kg | {} kcal | {} sessions | {:.1} L",
                entry.date, entry.weight_kg, entry.calories, entry.exercise_sessions, entry.water_liters
            );
            if !no_adjust {
                run_adjustment(&db, now)?;
            }
        }

        Some(Commands::Adjust) => run_adjustment(&db, now)?,

        Some(Commands::Stats) => print_stats(&db, now)?,

        Some(Commands::Clear) => {
            db.clear()?;
            println!("Plan removed.");
        }

        Some(Commands::Exercises { name: Some(name) }) => match find_exercise_by_name(&name) {
            Some(ex) => {
                println!("{} {} ({})", ex.category.emoji(), ex.name, ex.focus);
                println!("Equipment: {}", ex.equipment.unwrap_or("none"));
                println!("Technique: {}", ex.technique_or_default());
                if !ex.variations.is_empty() {
                    println!("Variations: {}", ex.variations.join(", "));
                }
                for obs in ex.observations_or_default() {
                    println!("  - {}", obs);
                }
            }
            None => bail!("Unknown exercise: {}", name),
        },

        Some(Commands::Exercises { name: None }) => {
            println!("Exercise catalog");
            println!("{:-<50}", "");
            for ex in get_all_exercises() {
                println!(
                    "{} {:18} | {:10} | {}",
                    ex.category.emoji(),
                    ex.name,
                    ex.focus,
                    ex.equipment.unwrap_or("-")
                );
            }
        }

        Some(Commands::Tips) => {
            let profile = require_profile(&db)?;
            println!("Tips for {}", profile.goal.label());
            for tip in tips_for_goal(profile.goal).chain(universal_tips()) {
                println!("  {}", format_tip(tip));
            }
        }
    }

    Ok(())
}

fn require_profile(db: &Database) -> Result<UserProfile> {
    match db.load_profile()? {
        Some(profile) => Ok(profile),
        None => bail!("No profile saved. Run `fitplan profile` first."),
    }
}

fn run_adjustment(db: &Database, now: DateTime<Utc>) -> Result<()> {
    let profile = require_profile(db)?;
    let Some(plan) = db.load_active(now)? else {
        println!("No active plan to adjust. Run `fitplan generate` first.");
        return Ok(());
    };
    let history = db.get_progress()?;
    let Some(latest) = history.last() else {
        println!("No progress logged yet.");
        return Ok(());
    };

    let outcome = PlanAdjuster::with_thread_rng().adjust_at(&plan, &profile, &history, latest, now);
    db.save(&outcome.plan)?;

    println!("{}", outcome.message);
    for adj in &outcome.adjustments {
        println!(
            "  [{:?}] {}: {} - {}",
            adj.priority,
            adj.field_path(),
            adj.change,
            adj.reason
        );
    }
    Ok(())
}

fn print_stats(db: &Database, now: DateTime<Utc>) -> Result<()> {
    let history = db.get_progress()?;
    let profile = db.load_profile()?;
    let goal = profile.as_ref().map_or(Goal::Maintain, |p| p.goal);
    let analytics = Analytics::new(history.clone());

    println!("Progress Statistics");
    println!("{:-<40}", "");

    if let Some(stats) = analytics.stats() {
        println!("Entries: {}", stats.entries);
        println!("Average weight: {:.1} kg", stats.average_weight);
        println!("Weight change: {:+.1} kg", stats.weight_change);
        println!("Average calories: {:.0} kcal", stats.average_calories);
        println!("Average sessions: {:.1}", stats.average_sessions);
        println!("Average water: {:.1} L", stats.average_water);
    }

    if let Some(latest) = history.last() {
        let analysis = analyze_at(&history, latest, goal, now);
        println!(
            "Trend: {} | consistency {}% | adherence {:.0}%",
            analysis.trend.name(),
            analysis.consistency,
            analysis.adherence
        );
        for rec in &analysis.recommendations {
            println!("  - {}", rec);
        }
    }

    if let Some(model) = WeightForecaster::train(&history) {
        println!();
        println!("{}", model.format_forecast());
    }

    println!();
    for rec in analytics.recommendations(goal) {
        println!("* {}", rec);
    }

    if let Some(plan) = db.load_active(now)? {
        let s = plan.stats();
        println!();
        println!(
            "Plan: {} meals, {} kcal/day, {} workouts/week, review {}",
            s.meal_count,
            s.calories_per_day,
            s.weekly_frequency,
            s.next_review.format("%Y-%m-%d")
        );
        for action in plan.next_actions(now) {
            println!("  > {}", action);
        }
    }

    Ok(())
}

fn print_plan(plan: &GeneratedPlan, now: DateTime<Utc>) {
    println!("{} ({})", plan.goal_label, plan.id);
    println!(
        "Generated {} | expires {}",
        plan.generated_at.format("%Y-%m-%d"),
        plan.expires_at.format("%Y-%m-%d")
    );
    if plan.is_expiring_soon(now) {
        println!("! This plan expires soon, consider generating a new one");
    }

    if let Some(diet) = &plan.diet {
        println!();
        println!("{} - {} kcal/day ({})", diet.name, diet.calories_per_day, diet.difficulty.name());
        println!(
            "Macros: {} g protein, {} g carbs, {} g fat",
            diet.macros.protein_g, diet.macros.carb_g, diet.macros.fat_g
        );
        println!("{:-<60}", "");
        for meal in &diet.meals {
            println!(
                "{} {:16} {:>5} kcal | {}",
                meal.time.format("%H:%M"),
                meal.name,
                meal.calories,
                meal.foods.join(", ")
            );
        }
        println!(
            "Water: {:.1} L ({})",
            diet.hydration.water_liters,
            diet.hydration.beverages.join(", ")
        );
        if let Some(supplements) = &diet.supplements {
            println!("Supplements: {}", supplements.join(", "));
        }
    }

    if let Some(training) = &plan.training {
        println!();
        println!(
            "{} - {}x/week for {} weeks ({})",
            training.name,
            training.weekly_frequency,
            training.duration_weeks,
            training.difficulty.name()
        );
        println!("{:-<60}", "");
        for workout in &training.workouts {
            println!(
                "{} {} {} - {} min, ~{} kcal",
                workout.day,
                workout.category.emoji(),
                workout.name,
                workout.duration_secs / 60,
                workout.estimated_calories
            );
            for ex in &workout.exercises {
                let load = match (ex.duration_secs, ex.weight_kg) {
                    (Some(secs), _) => format!("{}x{}s", ex.sets, secs),
                    (None, Some(kg)) => format!("{}x{} @ {:.1} kg", ex.sets, ex.reps, kg),
                    (None, None) => format!("{}x{}", ex.sets, ex.reps),
                };
                println!("    {:18} {} (rest {}s)", ex.name, load, ex.rest_secs);
            }
        }
        let rest: Vec<String> = training.rest.days.iter().map(|d| d.to_string()).collect();
        println!("Rest: {}", rest.join(", "));
    }

    if !plan.recommendations.is_empty() {
        println!();
        for rec in &plan.recommendations {
            println!("* {}", rec);
        }
    }
}
