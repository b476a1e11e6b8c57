//! # User Data Transfer Objects Module
//!
//! 회원가입 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   └── create_user.rs         # 회원가입 요청, SignupForm, ValidatedSignup
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs       # 공개 사용자 정보, 회원가입 응답
//! ```
//!
//! ## 응답 예제
//!
//! ```json
//! {
//!   "message": "Data added successfully",
//!   "fullName": "Jane Doe",
//!   "email": "jane.doe@example.com",
//!   "phoneNo": "+1234567890"
//! }
//! ```

pub mod request;
pub mod response;
