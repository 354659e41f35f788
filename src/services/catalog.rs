use crate::message::ModelDescriptor;

pub const MODELS: [ModelDescriptor; 3] = [
    ModelDescriptor {
        id: "text-gen-1",
        name: "Text Generator",
        kind: "text-generation",
        description: "Advanced text generation model",
    },
    ModelDescriptor {
        id: "sentiment-1",
        name: "Sentiment Analyzer",
        kind: "sentiment-analysis",
        description: "Analyze text sentiment",
    },
    ModelDescriptor {
        id: "classifier-1",
        name: "Content Classifier",
        kind: "classification",
        description: "Classify content into categories",
    },
];

pub fn available_models() -> Vec<ModelDescriptor> {
    MODELS.to_vec()
}
