use std::sync::Arc;

use async_trait::async_trait;
use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::{PaddingParams, Tokenizer, TruncationParams};

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;
use crate::infrastructure::llm::blocking::run_blocking;
use crate::presentation::config::PoolingStrategy;

/// Sentence embedder running a BERT-family model from the Hugging Face hub
/// on the local machine. Forward passes run on tokio's blocking pool.
pub struct LocalCandleEmbedder {
    inner: Arc<Inner>,
}

struct Inner {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    pooling: PoolingStrategy,
}

impl LocalCandleEmbedder {
    pub fn new(model_id: &str, pooling: PoolingStrategy) -> Result<Self, EmbedderError> {
        let device = Self::select_device();

        tracing::info!(
            device = ?device,
            model = model_id,
            pooling = ?pooling,
            "Initializing local Candle embedding model"
        );

        let api = Api::new().map_err(|e| EmbedderError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo
            .get("config.json")
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("model.safetensors: {}", e)))?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("read config: {}", e)))?;
        let config: BertConfig = serde_json::from_str(&config_contents)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("parse config: {}", e)))?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("tokenizer: {}", e)))?;

        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: config.max_position_embeddings,
                ..Default::default()
            }))
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("truncation config: {}", e)))?;
        tokenizer.with_padding(Some(PaddingParams::default()));

        let dtype = if device.is_cpu() {
            DType::F32
        } else {
            DType::F16
        };

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], dtype, &device)
                .map_err(|e| EmbedderError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let model = BertModel::load(vb, &config)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("model: {}", e)))?;

        tracing::info!("Local Candle embedding model loaded successfully");

        Ok(Self {
            inner: Arc::new(Inner {
                model,
                tokenizer,
                device,
                pooling,
            }),
        })
    }

    fn select_device() -> Device {
        Device::new_metal(0)
            .or_else(|_| Device::new_cuda(0))
            .unwrap_or(Device::Cpu)
    }
}

impl Inner {
    fn encode_texts(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbedderError> {
        let encodings = self
            .tokenizer
            .encode_batch(texts, true)
            .map_err(|e| EmbedderError::InferenceFailed(format!("tokenization: {}", e)))?;

        let batch_size = encodings.len();
        let seq_len = encodings.first().map(|e| e.get_ids().len()).unwrap_or(0);

        let input_ids: Vec<u32> = encodings
            .iter()
            .flat_map(|e| e.get_ids().iter().copied())
            .collect();
        let type_ids: Vec<u32> = encodings
            .iter()
            .flat_map(|e| e.get_type_ids().iter().copied())
            .collect();
        let attention: Vec<u32> = encodings
            .iter()
            .flat_map(|e| e.get_attention_mask().iter().copied())
            .collect();

        let input_ids = self.to_tensor(input_ids, batch_size, seq_len)?;
        let token_type_ids = self.to_tensor(type_ids, batch_size, seq_len)?;
        let attention_mask = self.to_tensor(attention, batch_size, seq_len)?;

        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))
            .and_then(|t| t.to_dtype(DType::F32))
            .map_err(inference_error)?;

        let pooled = match self.pooling {
            PoolingStrategy::Cls => cls_pool(&hidden),
            PoolingStrategy::Mean => mean_pool(&hidden, &attention_mask),
        }
        .map_err(inference_error)?;

        let mut results: Vec<Vec<f32>> = pooled.to_vec2().map_err(inference_error)?;
        results.iter_mut().for_each(|v| l2_normalize(v));

        Ok(results)
    }

    fn to_tensor(
        &self,
        values: Vec<u32>,
        batch_size: usize,
        seq_len: usize,
    ) -> Result<Tensor, EmbedderError> {
        Tensor::from_vec(values, (batch_size, seq_len), &self.device).map_err(inference_error)
    }
}

fn inference_error(e: candle_core::Error) -> EmbedderError {
    EmbedderError::InferenceFailed(e.to_string())
}

// First token ([CLS]) of every sequence.
fn cls_pool(hidden: &Tensor) -> candle_core::Result<Tensor> {
    hidden.narrow(1, 0, 1)?.squeeze(1)
}

fn mean_pool(hidden: &Tensor, attention_mask: &Tensor) -> candle_core::Result<Tensor> {
    let mask = attention_mask.to_dtype(DType::F32)?;
    let summed = hidden.broadcast_mul(&mask.unsqueeze(2)?)?.sum(1)?;
    let token_counts = mask.sum(1)?.unsqueeze(1)?;
    summed.broadcast_div(&token_counts)
}

fn l2_normalize(v: &mut [f32]) {
    let length: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if length > 0.0 {
        v.iter_mut().for_each(|x| *x /= length);
    }
}

#[async_trait]
impl Embedder for LocalCandleEmbedder {
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let inner = Arc::clone(&self.inner);
        let owned: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        let results = run_blocking(move || inner.encode_texts(owned)).await?;

        Ok(results.into_iter().map(Embedding::new).collect())
    }
}
