use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// BERT encoder producing one mean-pooled vector per input sequence.
///
/// Accepts both bare sentence-transformers checkpoints and ones exported with a
/// `bert.` prefix.
pub struct BertSentenceEncoder {
    bert: BertModel,
    hidden_size: usize,
}

impl BertSentenceEncoder {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");

        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Runs the encoder and mean-pools the token states: `[batch, hidden]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        let hidden = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;
        mean_pool(&hidden, attention_mask)
    }
}

/// Averages `[batch, seq, hidden]` states over the positions where the mask is set.
pub fn mean_pool(hidden: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
    let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
    let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
    let counts = mask.sum(1)?.clamp(1e-9f32, f32::MAX)?;
    summed.broadcast_div(&counts)
}
