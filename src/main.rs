fn main() {
    n8n_video_prompt::app::cli::run();
}
