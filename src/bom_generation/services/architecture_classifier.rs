/// Family to name patterns. Families are tried top to bottom so that
/// specific names win over short generic ones ("resnet50" is a cnn even
/// though it contains "t5").
const ARCHITECTURE_FAMILIES: &[(&str, &[&str])] = &[
    ("diffusion", &["stable-diffusion", "dalle", "midjourney", "diffusion"]),
    ("gan", &["stylegan", "dcgan", "wgan", "gan"]),
    ("autoencoder", &["vae", "autoencoder"]),
    (
        "cnn",
        &["resnet", "vgg", "inception", "efficientnet", "mobilenet", "convnext", "cnn"],
    ),
    ("rnn", &["lstm", "gru", "rnn"]),
    (
        "transformer",
        &["bert", "gpt", "llama", "mistral", "t5", "roberta", "albert", "electra", "transformer"],
    ),
];

/// ArchitectureClassifier service for ML model architectures
pub struct ArchitectureClassifier;

impl ArchitectureClassifier {
    /// Infers the architecture family of a model
    ///
    /// # Arguments
    /// * `architecture` - Architecture name as reported by the scanner
    ///
    /// # Returns
    /// One of transformer, cnn, rnn, gan, diffusion, autoencoder or other
    pub fn infer_family(architecture: &str) -> &'static str {
        let architecture = architecture.to_lowercase();
        ARCHITECTURE_FAMILIES
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| architecture.contains(p)))
            .map(|(family, _)| *family)
            .unwrap_or("other")
    }
}
