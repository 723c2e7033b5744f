//! The `/health` module every application ships with.
//!
//! Only the `package.json` import depends on input, through the root name.

use stencil_core::domain::{NameBundle, RenderContext};

pub fn adapter(_: &NameBundle, _: &RenderContext) -> String {
    r#"export abstract class IHealthService {
  abstract getText(): Promise<string>;
}
"#
    .to_string()
}

pub fn controller(_: &NameBundle, _: &RenderContext) -> String {
    r#"import { Controller, Get } from '@nestjs/common';
import { ApiResponse, ApiTags } from '@nestjs/swagger';

import { IHealthService } from './adapter';
import { SwagggerResponse } from './swagger';

@Controller()
@ApiTags('health')
export class HealthController {
  constructor(private readonly healthService: IHealthService) {}

  @Get('/health')
  @ApiResponse(SwagggerResponse.getHealth[200])
  @ApiResponse(SwagggerResponse.getHealth[500])
  async getHealth(): Promise<string> {
    return this.healthService.getText();
  }
}
"#
    .to_string()
}

pub fn module(_: &NameBundle, _: &RenderContext) -> String {
    r#"import { Module } from '@nestjs/common';
import { LoggerModule } from 'libs/infra/logger/module';

import { IHealthService } from './adapter';
import { HealthController } from './controller';
import { HealthService } from './service';

@Module({
  imports: [LoggerModule],
  controllers: [HealthController],
  providers: [
    {
      provide: IHealthService,
      useClass: HealthService,
    },
  ],
})
export class HealthModule {}
"#
    .to_string()
}

pub fn service(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"import {{ Injectable }} from '@nestjs/common';
import {{ name, version }} from 'apps/{root}/package.json';
import {{ ILoggerAdapter }} from 'libs/infra/logger/adapter';

import {{ IHealthService }} from './adapter';

@Injectable()
export class HealthService implements IHealthService {{
  constructor(private readonly loggerService: ILoggerAdapter) {{}}

  async getText(): Promise<string> {{
    const appName = `${{name}}-${{version}} UP!!`;
    this.loggerService.info({{ message: appName, context: `HealthService/getText` }});

    return appName;
  }}
}}
"#
    )
}

pub fn swagger(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"import {{ name }} from 'apps/{root}/package.json';
import {{ Swagger }} from 'libs/utils/documentation/swagger';

export const SwagggerResponse = {{
  getHealth: {{
    200: Swagger.defaultResponseText({{ status: 200, text: `${{name}} UP!!` }}),
    500: Swagger.defaultResponseError({{
      status: 500,
      route: '/health',
    }}),
  }},
}};

export const SwagggerRequest = {{
  /** If requesters has a body.  */
}};
"#
    )
}

pub fn controller_e2e(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"import {{ INestApplication }} from '@nestjs/common';
import {{ Test, TestingModule }} from '@nestjs/testing';
import {{ name, version }} from 'apps/{root}/package.json';
import {{ ILoggerAdapter }} from 'libs/infra/logger/adapter';
import {{ ApiInternalServerException }} from 'libs/utils/exception';
import request from 'supertest';

import {{ IHealthService }} from '../adapter';
import {{ HealthController }} from '../controller';
import {{ HealthService }} from '../service';

describe('HealthController (e2e)', () => {{
  let app: INestApplication;
  let service: IHealthService;

  beforeEach(async () => {{
    const module: TestingModule = await Test.createTestingModule({{
      controllers: [HealthController],
      providers: [
        {{
          provide: IHealthService,
          useFactory: () => new HealthService({{ info: jest.fn() }} as unknown as ILoggerAdapter),
        }},
      ],
      imports: [],
    }}).compile();

    app = module.createNestApplication();
    service = module.get(IHealthService);
    await app.init();
  }});

  describe('/health (GET)', () => {{
    const text = `${{name}}-${{version}} UP!!`;

    it(`should return ${{text}}`, async () => {{
      return request(app.getHttpServer()).get('/health').expect(text);
    }});

    it(`should getHealth with throw statusCode 500`, async () => {{
      service.getText = jest.fn().mockRejectedValue(new ApiInternalServerException('Error'));
      return request(app.getHttpServer()).get('/health').expect({{ statusCode: 500, message: 'Error' }});
    }});
  }});

  afterAll(async () => {{
    await app.close();
  }});
}});
"#
    )
}

pub fn module_spec(_: &NameBundle, _: &RenderContext) -> String {
    r#"import { Test, TestingModule } from '@nestjs/testing';

import { HealthModule } from '../module';

describe('HealthModule', () => {
  let healthModule: HealthModule;

  beforeEach(async () => {
    const app: TestingModule = await Test.createTestingModule({
      providers: [HealthModule]
    }).compile();

    healthModule = app.get<HealthModule>(HealthModule);
  });

  it('should be defined', () => {
    expect(healthModule).toBeInstanceOf(HealthModule);
  });
});
"#
    .to_string()
}

pub fn service_spec(b: &NameBundle, ctx: &RenderContext) -> String {
    let root = ctx.root_name(b);
    format!(
        r#"import {{ Test }} from '@nestjs/testing';
import {{ name, version }} from 'apps/{root}/package.json';
import {{ ILoggerAdapter }} from 'libs/infra/logger/adapter';

import {{ IHealthService }} from '../adapter';
import {{ HealthService }} from '../service';

describe('HealthService', () => {{
  let healthService: IHealthService;

  beforeEach(async () => {{
    const app = await Test.createTestingModule({{
      imports: [],
      providers: [
        {{
          provide: IHealthService,
          useFactory: () => new HealthService({{ info: jest.fn() }} as unknown as ILoggerAdapter),
        }},
      ],
    }}).compile();

    healthService = app.get(IHealthService);
  }});

  describe('getText', () => {{
    test('should getText successfully', async () => {{
      await expect(healthService.getText()).resolves.toEqual(`${{name}}-${{version}} UP!!`);
    }});
  }});
}});
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_reads_owning_app_package() {
        let bundle = NameBundle::derive("teste").unwrap();
        let ctx = RenderContext::new().with_project_root_name("zoo");

        let text = service(&bundle, &ctx);
        assert!(text.contains("from 'apps/zoo/package.json'"));
        assert!(text.contains("const appName = `${name}-${version} UP!!`;"));
    }

    #[test]
    fn static_files_ignore_the_name() {
        let a = NameBundle::derive("dog").unwrap();
        let b = NameBundle::derive("cat").unwrap();
        let ctx = RenderContext::new();
        assert_eq!(controller(&a, &ctx), controller(&b, &ctx));
        assert_eq!(module(&a, &ctx), module(&b, &ctx));
    }
}
