//! Self-play command - Two pruning agents learn by playing each other

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::SelfPlayConfig,
    cli::output::{print_kv, print_section, print_subsection, print_transcript},
    pipeline::{Observer, ProgressObserver, SelfPlay, TranscriptObserver},
    pruning::{PruningAgent, PruningAgentBuilder},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Run self-play between two pruning agents")]
pub struct SelfPlayArgs {
    /// Number of sets; results are reported per set
    #[arg(long, short = 's', default_value_t = 10)]
    pub sets: usize,

    /// Games per set
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which token makes the first move (`x` or `o`)
    #[arg(long = "first", default_value = "x")]
    pub first_player: String,

    /// Skip printing the first game of each set
    #[arg(long)]
    pub no_demo: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the per-set report to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl SelfPlayArgs {
    fn to_config(&self) -> Result<SelfPlayConfig> {
        let first_player = Player::parse_token(&self.first_player)
            .with_context(|| format!("invalid --first '{}'", self.first_player))?;
        Ok(SelfPlayConfig {
            sets: self.sets,
            games_per_set: self.games,
            seed: self.seed,
            first_player,
            demo: !self.no_demo,
        })
    }
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let config = args.to_config()?;
    config.validate()?;

    let mut o_agent = build_agent(&config, Player::O);
    let mut x_agent = build_agent(&config, Player::X);

    print_section("Self-play");
    print_kv("Sets", &config.sets.to_string());
    print_kv("Games per set", &config.games_per_set.to_string());
    print_kv("First player", &config.first_player.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut progress = ProgressObserver::new();
    let mut transcripts = TranscriptObserver::new(config.games_per_set);

    let mut run = SelfPlay::new(config.clone());
    if !args.no_progress {
        run = run.with_observer(&mut progress as &mut dyn Observer);
    }
    if config.demo {
        run = run.with_observer(&mut transcripts as &mut dyn Observer);
    }
    let report = run
        .run(&mut o_agent, &mut x_agent)
        .context("self-play run failed")?;

    let recorded = transcripts.into_transcripts();
    for (set_num, tally) in report.sets.iter().enumerate() {
        let games_before = set_num * config.games_per_set;
        if let Some(transcript) = recorded.iter().find(|t| t.game_num == games_before) {
            print_subsection(&format!("Demonstration after {games_before} games"));
            print_transcript(transcript);
        }
        println!("Outcome from past {} games:", tally.games());
        println!(
            "X Wins: {} | O Wins: {} | Draws: {}",
            tally.x_wins, tally.o_wins, tally.draws
        );
        if tally.unfinished > 0 {
            println!("Unfinished: {}", tally.unfinished);
        }
    }

    print_section("Agents");
    for (label, agent) in [("O agent", &o_agent), ("X agent", &x_agent)] {
        let stats = agent.stats();
        print_subsection(label);
        print_kv("Remaining moves", &stats.remaining_moves.to_string());
        print_kv("Pruned moves", &stats.pruned_moves.to_string());
        print_kv("Exhausted states", &stats.exhausted_states.to_string());
        print_kv("Losses seen", &stats.losses_seen.to_string());
        print_kv("Resignations", &stats.resignations.to_string());
    }

    if let Some(path) = &args.export {
        report
            .save(path)
            .with_context(|| format!("failed to export report to {}", path.display()))?;
        println!("\nReport exported to {}", path.display());
    }

    Ok(())
}

fn build_agent(config: &SelfPlayConfig, side: Player) -> PruningAgent {
    PruningAgentBuilder::from_config(&config.agent_config(side)).build()
}
