//! LLM 服务 - 业务能力层
//!
//! 只负责"根据提示词生成正文"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（默认使用 Gemini 的兼容端点）

use std::future::Future;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::GenerationError;

/// 文本生成能力
///
/// 流程层只依赖这个 trait，测试时可以替换成假的实现。
pub trait TextGenerator {
    /// 发送一条提示词，返回生成的正文
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, GenerationError>> + Send;

    /// 使用的模型名称（仅用于日志）
    fn model_name(&self) -> &str;
}

/// LLM 服务
///
/// 职责：
/// - 调用 LLM API 生成博客正文
/// - 每次请求只发送一条用户消息
/// - 不重试、不流式输出、不统计 token
/// - 不关心文件名和存储
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: Option<f32>,
}

impl LlmService {
    /// 创建新的 LLM 服务
    ///
    /// 此处不校验 API 密钥，密钥无效时在第一次调用时报错。
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
            temperature: config.llm_temperature,
        }
    }

    /// 通用的 LLM 调用函数
    ///
    /// 返回第一个候选的内容，原样返回，不做 trim。
    ///
    /// # 示例
    /// ```no_run
    /// # use blog_forge::{Config, services::LlmService};
    /// # async fn example() -> Result<(), blog_forge::error::GenerationError> {
    /// let service = LlmService::new(&Config::from_env());
    /// let body = service.send_to_llm("Write a haiku about Rust").await?;
    /// println!("{}", body);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_to_llm(&self, user_message: &str) -> Result<String, GenerationError> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| GenerationError::request(&self.model_name, e))?;

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)]);
        if let Some(temperature) = self.temperature {
            args.temperature(temperature);
        }
        let request = args
            .build()
            .map_err(|e| GenerationError::request(&self.model_name, e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            GenerationError::request(&self.model_name, e)
        })?;

        debug!("LLM API 调用成功");

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| GenerationError::EmptyContent {
                model: self.model_name.clone(),
            })
    }
}

impl TextGenerator for LlmService {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.send_to_llm(prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 创建测试用的 LlmService
    fn create_test_service() -> LlmService {
        let config = Config {
            llm_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            ..Config::default()
        };
        LlmService::new(&config)
    }

    #[test]
    fn test_service_uses_configured_model() {
        let config = Config {
            llm_model_name: "some-other-model".to_string(),
            llm_temperature: Some(0.3),
            ..Config::default()
        };
        let service = LlmService::new(&config);
        assert_eq!(service.model_name(), "some-other-model");
        assert_eq!(service.temperature, Some(0.3));
    }

    /// 测试真实 LLM 调用
    ///
    /// 运行方式：
    /// ```bash
    /// GEMINI_API_KEY=... cargo test test_send_to_llm_simple -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_send_to_llm_simple() {
        let _ = tracing_subscriber::fmt::try_init();

        let service = create_test_service();

        let result = service
            .generate("Write one sentence about the Rust borrow checker.")
            .await;

        match result {
            Ok(response) => {
                println!("\n========== LLM 响应 ==========");
                println!("{}", response);
                println!("==============================\n");
                assert!(!response.is_empty());
            }
            Err(e) => {
                panic!("测试失败: {}", e);
            }
        }
    }
}
