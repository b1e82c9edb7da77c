use crate::models::FormSubmission;

const NOT_PROVIDED: &str = "Not provided";
const NO_MESSAGE: &str = "No message provided";
const UNKNOWN: &str = "Unknown";

pub fn assessment_subject(form: &FormSubmission) -> String {
    let name = form.field_or("name", UNKNOWN);
    format!("🎯 New Assessment Request from {name} - Collective Vox")
}

pub fn contact_subject(form: &FormSubmission) -> String {
    let name = form.field_or("name", UNKNOWN);
    format!("💬 New Contact from {name} - Collective Vox")
}

/// Field values are interpolated without HTML escaping.
pub fn render_assessment(form: &FormSubmission) -> String {
    let name = form.field_or("name", NOT_PROVIDED);
    let email = form.field_or("email", NOT_PROVIDED);
    let phone = form.field_or("phone", NOT_PROVIDED);
    let industry = form.field_or("industry", NOT_PROVIDED);
    let job_title = form.field_or("jobTitle", NOT_PROVIDED);
    let experience_level = form.field_or("experienceLevel", NOT_PROVIDED);
    let key_challenges = form.field_or("keyChallenges", NOT_PROVIDED);
    let primary_goals = form.field_or("primaryGoals", NOT_PROVIDED);
    let interested_in = form.field_or("interestedIn", NOT_PROVIDED);
    let preferred_times = form.field_or("preferredTimes", NOT_PROVIDED);
    let submitted_at = form.field_or("submitted_at", UNKNOWN);

    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #ff6b35; border-bottom: 2px solid #ff6b35; padding-bottom: 10px;">
            🎯 New Free Assessment Request - Collective Vox
        </h2>

        <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #333;">Contact Information</h3>
            <p><strong>Name:</strong> {name}</p>
            <p><strong>Email:</strong> {email}</p>
            <p><strong>Phone:</strong> {phone}</p>
        </div>

        <div style="background-color: #fff3cd; padding: 20px; border-radius: 8px; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #333;">Professional Details</h3>
            <p><strong>Industry:</strong> {industry}</p>
            <p><strong>Job Title:</strong> {job_title}</p>
            <p><strong>Experience Level:</strong> {experience_level}</p>
        </div>

        <div style="background-color: #d1ecf1; padding: 20px; border-radius: 8px; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #333;">Key Challenges</h3>
            <p style="background-color: white; padding: 15px; border-radius: 4px; border-left: 4px solid #ff6b35;">
                {key_challenges}
            </p>
        </div>

        <div style="background-color: #d4edda; padding: 20px; border-radius: 8px; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #333;">Goals & Interests</h3>
            <p><strong>Primary Goals:</strong> {primary_goals}</p>
            <p><strong>Interested In:</strong> {interested_in}</p>
            <p><strong>Preferred Meeting Times:</strong> {preferred_times}</p>
        </div>

        <div style="margin-top: 30px; padding: 20px; background-color: #f8f9fa; border-radius: 8px;">
            <p style="margin: 0; font-size: 14px; color: #666;">
                This assessment request was submitted through collectivevox.app
            </p>
            <p style="margin: 5px 0 0 0; font-size: 14px; color: #666;">
                Submitted at: {submitted_at}
            </p>
        </div>
    </div>
</body>
</html>"#
    )
}

/// The message block uses `white-space: pre-wrap` so line breaks survive.
pub fn render_contact(form: &FormSubmission) -> String {
    let name = form.field_or("name", NOT_PROVIDED);
    let email = form.field_or("email", NOT_PROVIDED);
    let message = form.field_or("message", NO_MESSAGE);
    let submitted_at = form.field_or("submitted_at", UNKNOWN);

    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #ff6b35; border-bottom: 2px solid #ff6b35; padding-bottom: 10px;">
            💬 New Contact Inquiry - Collective Vox
        </h2>

        <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #333;">Contact Information</h3>
            <p><strong>Name:</strong> {name}</p>
            <p><strong>Email:</strong> {email}</p>
        </div>

        <div style="background-color: #fff3cd; padding: 20px; border-radius: 8px; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #333;">Message</h3>
            <p style="background-color: white; padding: 15px; border-radius: 4px; border-left: 4px solid #ff6b35; white-space: pre-wrap;">{message}</p>
        </div>

        <div style="margin-top: 30px; padding: 20px; background-color: #f8f9fa; border-radius: 8px;">
            <p style="margin: 0; font-size: 14px; color: #666;">
                This contact inquiry was submitted through collectivevox.app
            </p>
            <p style="margin: 5px 0 0 0; font-size: 14px; color: #666;">
                Submitted at: {submitted_at}
            </p>
        </div>
    </div>
</body>
</html>"#
    )
}
