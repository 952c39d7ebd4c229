use react_runner_core::{
    InvocationRequest, RunnerConfig,
    command::{REACT_SCRIPTS_BIN, format_test_name, split_additional_arguments},
    utils::base_name,
};

pub fn print_command_breakdown(request: &InvocationRequest, config: &RunnerConfig) {
    println!("   🔧 Command breakdown:");
    println!("      • runner: {}", REACT_SCRIPTS_BIN);
    println!("      • file: {}", base_name(&request.source_path));
    println!(
        "      • testNamePattern: {}",
        format_test_name(&request.test_name)
    );

    if !config.additional_arguments.is_empty() {
        println!(
            "      • extraArgs: {:?}",
            split_additional_arguments(&config.additional_arguments)
        );
    }

    if !config.environment_variables.is_empty() {
        println!("      • extraEnv:");
        for (key, value) in &config.environment_variables {
            println!("          {}={}", key, value);
        }
    }
}
