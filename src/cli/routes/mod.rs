//! Routes command - prints the endpoint table

/// Method, path and description of every user endpoint
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("POST", "/api/v1/users", "Create a new user"),
    ("GET", "/api/v1/users", "Get all users"),
    ("GET", "/api/v1/users/count", "Get users count"),
    ("GET", "/api/v1/users/{id}", "Get user by ID"),
    ("PUT", "/api/v1/users/{id}", "Update user by ID"),
    ("DELETE", "/api/v1/users/{id}", "Delete user by ID"),
    ("DELETE", "/api/v1/users/clear", "Clear all users"),
];

/// Render the endpoint table, one aligned line per endpoint
pub fn render_endpoints() -> Vec<String> {
    ENDPOINTS
        .iter()
        .map(|(method, path, description)| format!("{:<6} {:<20} - {}", method, path, description))
        .collect()
}

/// Print the endpoint table to stdout
pub fn run() -> anyhow::Result<()> {
    println!("API Endpoints:");
    for line in render_endpoints() {
        println!("{}", line);
    }

    Ok(())
}
