use std::io::{self, Write};

pub enum SimulationType {
    Simple,
    SweepBudget,
    Exit,
}

impl SimulationType {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(SimulationType::Simple),
            "2" => Some(SimulationType::SweepBudget),
            "0" => Some(SimulationType::Exit),
            _ => None,
        }
    }
}

pub struct SimulatorInterface;

impl SimulatorInterface {
    pub fn new() -> Self {
        Self
    }

    pub fn get_menu_text(&self) -> &'static str {
        "Available simulation types:\n  1. Simple run (one sample, first budget)\n  2. Sweep blocking budget\n  0. Exit"
    }

    pub fn show_menu(&self) {
        println!("=== Contagion Blocking Simulator ===");
        println!("{}", self.get_menu_text());
    }

    pub fn get_user_choice(&self) -> Option<SimulationType> {
        print!("\nSelect simulation type (0-2): ");
        io::stdout().flush().ok()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).ok()?;
        SimulationType::from_input(&input)
    }
}

impl Default for SimulatorInterface {
    fn default() -> Self {
        Self::new()
    }
}
