fn main() {
    let git_dir_output = std::process::Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .ok();
    let git_dir = git_dir_output.as_ref().and_then(|output| {
        std::str::from_utf8(&output.stdout)
            .ok()
            .map(str::trim_end)
            .filter(|dir| !dir.is_empty())
    });

    // Rebuild when HEAD or the refs move so the embedded version stays current.
    if let Some(git_dir) = git_dir {
        let git_path = std::path::Path::new(git_dir);
        for watched in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if git_path.join(watched).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{watched}");
            }
        }
    }

    let describe_output = std::process::Command::new("git")
        .args(["describe", "--always", "--tags", "--long", "--dirty"])
        .output()
        .ok();
    let git_info = describe_output
        .as_ref()
        .filter(|output| output.status.success())
        .and_then(|output| std::str::from_utf8(&output.stdout).ok().map(str::trim));

    if let Some(git_info) = git_info {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
